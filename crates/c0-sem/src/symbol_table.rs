//! The scope stack the analyzer consults for every identifier it sees.
//!
//! Scopes nest like source blocks do, but only a function body starts a new
//! *frame*: `loada`'s level-difference operand counts frames crossed, not
//! lexical blocks, so an ordinary `{ }` block inherits its parent's frame
//! level and its `next_offset` counter (sibling blocks reuse the same stack
//! slots once exited).

use indexmap::IndexMap;

use c0_obj::PrimitiveType;
use c0_util::Symbol;

use crate::error::{SymbolError, SymbolResult};

#[derive(Debug, Clone)]
struct SymbolAttrs {
    ty: PrimitiveType,
    is_const: bool,
    is_function: bool,
    /// `None` for functions — a function has no stack slot of its own.
    offset: Option<u32>,
    size: u32,
    function_level: u32,
}

struct Scope {
    symbols: IndexMap<Symbol, SymbolAttrs>,
    next_offset: u32,
    function_level: u32,
}

impl Scope {
    fn root() -> Self {
        Self {
            symbols: IndexMap::new(),
            next_offset: 0,
            function_level: 0,
        }
    }
}

/// A stack of scope records, innermost last.
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::root()],
        }
    }

    /// Push a new scope. `new_frame` resets the stack-offset counter and
    /// bumps the frame level (function entry); otherwise the new scope
    /// inherits both from its parent (an ordinary `{ }` block).
    pub fn enter_scope(&mut self, new_frame: bool) {
        let parent = self.scopes.last().expect("global scope is never popped");
        let (next_offset, function_level) = if new_frame {
            (0, parent.function_level + 1)
        } else {
            (parent.next_offset, parent.function_level)
        };
        self.scopes.push(Scope {
            symbols: IndexMap::new(),
            next_offset,
            function_level,
        });
    }

    pub fn exit_scope(&mut self) {
        debug_assert!(self.scopes.len() > 1, "cannot exit the global scope");
        self.scopes.pop();
    }

    /// Whether `name` is declared in the innermost scope specifically — used
    /// to detect redeclaration within the same block.
    pub fn contains_in_current_scope(&self, name: Symbol) -> bool {
        self.scopes.last().unwrap().symbols.contains_key(&name)
    }

    /// Whether `name` is visible at all, searching innermost-outward.
    pub fn contains(&self, name: Symbol) -> bool {
        self.scopes.iter().rev().any(|scope| scope.symbols.contains_key(&name))
    }

    /// Declare a variable in the innermost scope, allocating its stack slot.
    pub fn add(&mut self, name: Symbol, ty: PrimitiveType, is_const: bool) {
        let scope = self.scopes.last_mut().unwrap();
        let size = ty.slots();
        let offset = scope.next_offset;
        scope.next_offset += size;
        scope.symbols.insert(
            name,
            SymbolAttrs {
                ty,
                is_const,
                is_function: false,
                offset: Some(offset),
                size,
                function_level: scope.function_level,
            },
        );
    }

    /// Declare a function name in the innermost scope. Functions have no
    /// stack slot, so `offset` stays `None`.
    pub fn add_function(&mut self, name: Symbol, return_type: PrimitiveType) {
        let scope = self.scopes.last_mut().unwrap();
        let function_level = scope.function_level;
        scope.symbols.insert(
            name,
            SymbolAttrs {
                ty: return_type,
                is_const: true,
                is_function: true,
                offset: None,
                size: 0,
                function_level,
            },
        );
    }

    fn lookup(&self, name: Symbol) -> SymbolResult<&SymbolAttrs> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.symbols.get(&name))
            .ok_or_else(|| SymbolError::SymbolNotFound(name.as_str().to_string()))
    }

    pub fn is_const(&self, name: Symbol) -> SymbolResult<bool> {
        self.lookup(name).map(|attrs| attrs.is_const)
    }

    pub fn is_function(&self, name: Symbol) -> SymbolResult<bool> {
        self.lookup(name).map(|attrs| attrs.is_function)
    }

    pub fn type_of(&self, name: Symbol) -> SymbolResult<PrimitiveType> {
        self.lookup(name).map(|attrs| attrs.ty)
    }

    pub fn size(&self, name: Symbol) -> SymbolResult<u32> {
        self.lookup(name).map(|attrs| attrs.size)
    }

    /// `(level_diff, stack_offset)`, the two operands `loada` takes.
    /// `level_diff` is how many function frames separate the current scope
    /// from the one `name` was declared in.
    pub fn offset(&self, name: Symbol) -> SymbolResult<(u32, u32)> {
        let current_level = self.scopes.last().unwrap().function_level;
        let attrs = self.lookup(name)?;
        let offset = attrs
            .offset
            .ok_or_else(|| SymbolError::FunctionTypeHasNoOffsetAttribute(name.as_str().to_string()))?;
        Ok((current_level - attrs.function_level, offset))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
