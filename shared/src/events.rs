//! Chaining a user-supplied handler in front of a library handler.

/// Events that carry a "default prevented" flag
pub trait DefaultPrevented {
    fn default_prevented(&self) -> bool;
}

impl<E: DefaultPrevented + ?Sized> DefaultPrevented for &E {
    fn default_prevented(&self) -> bool {
        (**self).default_prevented()
    }
}

#[cfg(feature = "web")]
mod web {
    use super::DefaultPrevented;

    macro_rules! impl_default_prevented {
        ($($ty:ty),* $(,)?) => {
            $(
                impl DefaultPrevented for $ty {
                    fn default_prevented(&self) -> bool {
                        web_sys::Event::default_prevented(self)
                    }
                }
            )*
        };
    }

    impl_default_prevented!(
        web_sys::Event,
        web_sys::MouseEvent,
        web_sys::KeyboardEvent,
        web_sys::FocusEvent,
    );
}

/// Wrap a library handler so that a user handler runs first and can veto it.
///
/// The returned handler calls `theirs` (when present), then calls `ours`
/// only if the event has not been marked default-prevented. It yields the
/// library handler's result, or `None` when the library handler was skipped.
pub fn compose_event_handlers<E, R, T, O>(theirs: Option<T>, ours: O) -> impl Fn(&E) -> Option<R>
where
    E: DefaultPrevented,
    T: Fn(&E),
    O: Fn(&E) -> R,
{
    move |event: &E| {
        if let Some(theirs) = &theirs {
            theirs(event);
        }
        if event.default_prevented() {
            None
        } else {
            Some(ours(event))
        }
    }
}
