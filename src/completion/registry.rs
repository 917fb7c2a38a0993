//! Preference-ordered hook selection

use super::CompletionHook;
use tracing::debug;

/// Completion hooks in preference order
///
/// Only one hook is ever used: the first one registered, or the fallback when
/// nothing was registered.
#[derive(Default)]
pub struct HookRegistry<'a> {
    hooks: Vec<(String, Box<dyn CompletionHook + 'a>)>,
}

impl<'a> HookRegistry<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Add a hook after those already registered
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, hook: impl CompletionHook + 'a) -> Self {
        self.hooks.push((name.into(), Box::new(hook)));
        self
    }

    /// Add a hook if one is given
    #[must_use]
    pub fn with_optional(
        self,
        name: impl Into<String>,
        hook: Option<impl CompletionHook + 'a>,
    ) -> Self {
        match hook {
            Some(hook) => self.with(name, hook),
            None => self,
        }
    }

    /// Number of registered hooks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Pick the preferred hook, falling back to `fallback`
    pub fn resolve(self, fallback: impl CompletionHook + 'a) -> Box<dyn CompletionHook + 'a> {
        if let Some((name, hook)) = self.hooks.into_iter().next() {
            debug!(hook = %name, "using registered completion hook");
            hook
        } else {
            debug!("no completion hook registered, using fallback");
            Box::new(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionFlag;

    #[test]
    fn first_registered_hook_wins() {
        let first = CompletionFlag::new();
        let second = CompletionFlag::new();
        let fallback = CompletionFlag::new();

        let mut hook = HookRegistry::new()
            .with("first", first.clone())
            .with("second", second.clone())
            .resolve(fallback.clone());
        hook.notify_complete();

        assert!(first.is_set());
        assert!(!second.is_set());
        assert!(!fallback.is_set());
    }

    #[test]
    fn fallback_used_when_empty() {
        let fallback = CompletionFlag::new();
        let registry = HookRegistry::new().with_optional("none", None::<CompletionFlag>);
        assert!(registry.is_empty());

        let mut hook = registry.resolve(fallback.clone());
        hook.notify_complete();
        assert!(fallback.is_set());
    }

    #[test]
    fn optional_hook_is_registered_when_present() {
        let flag = CompletionFlag::new();
        let registry = HookRegistry::new().with_optional("flag", Some(flag.clone()));
        assert_eq!(registry.len(), 1);

        registry.resolve(CompletionFlag::new()).notify_complete();
        assert!(flag.is_set());
    }
}
