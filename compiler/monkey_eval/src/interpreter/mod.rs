//! Tree-walking interpreter.
//!
//! Every evaluation step returns [`EvalResult`]. `return` and runtime errors
//! travel on the `Err` side as [`ControlAction`]s, so `?` stops a block at
//! the first one. Function calls unwrap `Return`; errors pass through to the
//! top.
//!
//! An interpreter evaluates nodes of a single arena. Calling a function
//! evaluates its body in a child interpreter over the function's own arena
//! and a fresh scope enclosed by the captured one.

mod builder;
mod call;

pub use builder::InterpreterBuilder;

/// What a statement list left behind: `None` when it was empty or its last
/// evaluated statement was a `let`.
pub type Completion = Option<Value>;

use crate::errors::{identifier_not_found, unusable_as_hash_key};
use crate::{
    evaluate_binary, evaluate_index, evaluate_unary, Builtin, ControlAction, Environment,
    EvalError, EvalResult, HashPair, HashValue, SharedPrintHandler, Value,
};
use monkey_ir::{
    Block, ExprId, ExprKind, ExprRange, HashEntryRange, Name, Program, SharedArena, StmtId,
    StmtKind, StmtRange, StringInterner,
};
use monkey_stack::ensure_sufficient_stack;

/// Evaluator over one arena and one scope.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: SharedArena,
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    /// User-function calls active below this interpreter.
    pub(crate) call_depth: usize,
    pub(crate) max_call_depth: Option<usize>,
}

impl<'a> Interpreter<'a> {
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Interpreter for a nested frame sharing this one's configuration.
    fn frame(&self, arena: SharedArena, env: Environment, call_depth: usize) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena,
            env,
            print_handler: self.print_handler.clone(),
            call_depth,
            max_call_depth: self.max_call_depth,
        }
    }

    /// Evaluate a whole program in this interpreter's environment.
    ///
    /// A top-level `return` ends the program with its value. A program that
    /// produces no value evaluates to `null`.
    pub fn eval_program(&self, program: &Program) -> Result<Value, EvalError> {
        Ok(self
            .eval_program_completion(program)?
            .unwrap_or(Value::Null))
    }

    /// Like [`eval_program`](Self::eval_program), but reports a program that
    /// produced no value as `None`.
    ///
    /// The program may come from any arena; later REPL lines each bring
    /// their own.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_program_completion(&self, program: &Program) -> Result<Completion, EvalError> {
        let frame = self.frame(program.arena.clone(), self.env.clone(), self.call_depth);
        match frame.eval_stmts(program.stmts) {
            Ok(completion) => Ok(completion),
            Err(ControlAction::Return(value)) => Ok(Some(value)),
            Err(ControlAction::Error(error)) => {
                tracing::debug!(%error, "program raised an error");
                Err(error)
            }
        }
    }

    /// Evaluate a block in the current scope; blocks do not open scopes.
    pub fn eval_block(&self, block: Block) -> EvalResult<Completion> {
        self.eval_stmts(block.stmts)
    }

    fn eval_stmts(&self, stmts: StmtRange) -> EvalResult<Completion> {
        let mut completion = None;
        for &id in self.arena.stmt_list(stmts) {
            completion = self.eval_stmt(id)?;
        }
        Ok(completion)
    }

    fn eval_stmt(&self, id: StmtId) -> EvalResult<Completion> {
        let stmt = self.arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.set(name, value);
                Ok(None)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                Err(ControlAction::Return(value))
            }
            StmtKind::Expr(expr) => self.eval_expr_completion(expr),
        }
    }

    /// Evaluate an expression. Errors pick up the span of the innermost
    /// expression that raised them.
    pub fn eval_expr(&self, id: ExprId) -> EvalResult {
        Ok(self.eval_expr_completion(id)?.unwrap_or(Value::Null))
    }

    /// An `if` or call whose block produced no value passes that on.
    fn eval_expr_completion(&self, id: ExprId) -> EvalResult<Completion> {
        ensure_sufficient_stack(|| {
            let expr = self.arena.get_expr(id);
            self.eval_expr_kind(&expr.kind)
                .map_err(|action| action.with_span_if_error(expr.span))
        })
    }

    fn eval_expr_kind(&self, kind: &ExprKind) -> EvalResult<Completion> {
        let value = match *kind {
            ExprKind::Ident(name) => self.eval_ident(name)?,
            ExprKind::Int(n) => Value::int(n),
            ExprKind::Bool(b) => Value::Bool(b),
            ExprKind::Str(s) => Value::string(self.interner.lookup(s)),
            ExprKind::Prefix { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(op, &operand)?
            }
            ExprKind::Infix { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, op)?
            }
            ExprKind::If {
                cond,
                consequence,
                alternative,
            } => {
                return if self.eval_expr(cond)?.is_truthy() {
                    self.eval_block(consequence)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative)
                } else {
                    Ok(Some(Value::Null))
                };
            }
            ExprKind::Function { params, body } => Value::function(
                self.arena.get_params(params).to_vec(),
                body,
                self.arena.clone(),
                self.env.clone(),
            ),
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee)?;
                let args = self.eval_expr_list(args)?;
                return self.call(&callee, &args);
            }
            ExprKind::Array(elements) => Value::array(self.eval_expr_list(elements)?),
            ExprKind::Index { collection, index } => {
                let collection = self.eval_expr(collection)?;
                let index = self.eval_expr(index)?;
                evaluate_index(&collection, &index)?
            }
            ExprKind::Hash(entries) => self.eval_hash(entries)?,
        };
        Ok(Some(value))
    }

    /// Environment chain first, then builtins.
    fn eval_ident(&self, name: Name) -> EvalResult {
        if let Some(value) = self.env.get(name) {
            return Ok(value);
        }
        let text = self.interner.lookup(name);
        match Builtin::from_name(text) {
            Some(builtin) => Ok(Value::Builtin(builtin)),
            None => Err(identifier_not_found(text).into()),
        }
    }

    /// Left to right, stopping at the first error.
    fn eval_expr_list(&self, range: ExprRange) -> EvalResult<Vec<Value>> {
        self.arena
            .get_expr_list(range)
            .iter()
            .map(|&id| self.eval_expr(id))
            .collect()
    }

    fn eval_hash(&self, entries: HashEntryRange) -> EvalResult {
        let mut map = HashValue::new();
        for entry in self.arena.get_hash_entries(entries) {
            let key = self.eval_expr(entry.key)?;
            let hash_key = key
                .hash_key()
                .ok_or_else(|| unusable_as_hash_key(&key))
                .map_err(|e| e.with_span(self.arena.get_expr(entry.key).span))?;
            let value = self.eval_expr(entry.value)?;
            map.insert(hash_key, HashPair { key, value });
        }
        Ok(Value::hash(map))
    }
}
