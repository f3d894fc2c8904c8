use c0_drv::main;

fn main() {
    if let Err(e) = main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
