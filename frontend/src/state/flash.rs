//! One-shot state handed from one page to the next across a navigation.
//! Whoever reads it also clears it, so re-rendering never shows it twice.

use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    /// Set by a successful login; the dashboard greets the user.
    Welcome,
    /// Shown by the login page on entry.
    Error(String),
}

#[derive(Debug, Clone, Copy)]
pub struct FlashSlot(RwSignal<Option<Flash>>);

impl FlashSlot {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn set(&self, flash: Flash) {
        self.0.set(Some(flash));
    }

    pub fn peek(&self) -> Option<Flash> {
        self.0.get_untracked()
    }

    pub fn take_welcome(&self) -> bool {
        self.take_if(|flash| matches!(flash, Flash::Welcome))
            .is_some()
    }

    pub fn take_error(&self) -> Option<String> {
        match self.take_if(|flash| matches!(flash, Flash::Error(_))) {
            Some(Flash::Error(message)) => Some(message),
            _ => None,
        }
    }

    fn take_if(&self, pred: impl Fn(&Flash) -> bool) -> Option<Flash> {
        if !self.0.with_untracked(|slot| slot.as_ref().is_some_and(&pred)) {
            return None;
        }
        let mut taken = None;
        self.0.update(|slot| taken = slot.take());
        taken
    }
}

impl Default for FlashSlot {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_flash() -> FlashSlot {
    let slot = FlashSlot::new();
    provide_context(slot);
    slot
}

pub fn use_flash() -> FlashSlot {
    use_context::<FlashSlot>().unwrap_or_else(provide_flash)
}
