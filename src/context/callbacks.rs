/*!
General callbacks associated with a context.

# Termination

A solve checks the terminate callback at the start of each step of the search, before any simplification.
If the callback returns true the solve stops and reports [Unknown](crate::reports::Report::Unknown).

```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
# use std::sync::{atomic::{AtomicBool, Ordering}, Arc};
let mut the_context = Context::from_config(Config::default());
assert!(the_context.add_clause(vec![1, 2]).is_ok());

let abort = Arc::new(AtomicBool::new(true));
let flag = abort.clone();
the_context.set_callback_terminate(Box::new(move || flag.load(Ordering::Relaxed)));

assert_eq!(the_context.solve(), Report::Unknown);

abort.store(false, Ordering::Relaxed);
assert_eq!(the_context.solve(), Report::Satisfiable);
```
*/

use super::Context;

pub type CallbackTerminate = dyn FnMut() -> bool;

impl Context {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }
}
