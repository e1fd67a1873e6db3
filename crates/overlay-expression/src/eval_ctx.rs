use crate::thread::Thread;
use crate::value::EvalValue;
use indexmap::IndexMap;

/// The execution context passed to every operator eval function.
pub struct EvalCtx<'a> {
    /// The thread the expression runs on (operators, globals, budget).
    pub thread: &'a mut Thread,
    /// Parameters bound by the enclosing function call.
    pub locals: &'a IndexMap<String, EvalValue>,
}

impl<'a> EvalCtx<'a> {
    pub fn new(thread: &'a mut Thread, locals: &'a IndexMap<String, EvalValue>) -> Self {
        EvalCtx { thread, locals }
    }

    /// Looks a name up in the locals first, then in the thread globals.
    pub fn lookup(&self, name: &str) -> Option<&EvalValue> {
        self.locals.get(name).or_else(|| self.thread.global(name))
    }
}
