//! The condiment hook and the input it may consult.

use std::fmt;

/// Somewhere to get a yes/no answer from: a console, a dialog, a test stub.
///
/// Any `Fn(&str) -> bool` closure is a source.
///
/// ```rust
/// use gumball::beverage::PreferenceSource;
///
/// let always_yes = |_question: &str| true;
/// assert!(always_yes.ask("Would you like Lemon? (y/n)"));
/// ```
pub trait PreferenceSource: Send + Sync {
    fn ask(&self, question: &str) -> bool;
}

impl<F> PreferenceSource for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn ask(&self, question: &str) -> bool {
        self(question)
    }
}

/// Decides whether condiments go in.
///
/// The default hook always says yes. A beverage overrides it by carrying a
/// different hook, usually one that asks a [`PreferenceSource`].
///
/// # Example
///
/// ```rust
/// use gumball::beverage::CondimentHook;
///
/// assert!(CondimentHook::default().check());
/// assert!(!CondimentHook::never().check());
///
/// let hook = CondimentHook::asking("Sugar? (y/n)", |q: &str| q.starts_with("Sugar"));
/// assert!(hook.check());
/// ```
pub struct CondimentHook {
    decide: Box<dyn Fn() -> bool + Send + Sync>,
}

impl CondimentHook {
    /// Hook backed by an arbitrary predicate.
    pub fn new<F>(decide: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        CondimentHook {
            decide: Box::new(decide),
        }
    }

    /// Always add condiments.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Never add condiments.
    pub fn never() -> Self {
        Self::new(|| false)
    }

    /// Put `question` to `source` each time the hook is checked.
    pub fn asking<P>(question: impl Into<String>, source: P) -> Self
    where
        P: PreferenceSource + 'static,
    {
        let question = question.into();
        Self::new(move || source.ask(&question))
    }

    pub fn check(&self) -> bool {
        (self.decide)()
    }
}

impl Default for CondimentHook {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Debug for CondimentHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CondimentHook").finish_non_exhaustive()
    }
}
