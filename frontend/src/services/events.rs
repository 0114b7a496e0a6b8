//! Yew-flavoured wrappers around handler composition.

use shared::{compose_event_handlers, DefaultPrevented};
use yew::Callback;

/// Chain a user callback in front of a library callback. The library callback
/// is skipped when the user callback calls `prevent_default()`; its output is
/// returned otherwise.
pub fn compose_callbacks<E, R>(theirs: Option<Callback<E>>, ours: Callback<E, R>) -> Callback<E, Option<R>>
where
    E: DefaultPrevented + Clone + 'static,
    R: 'static,
{
    let handler = compose_event_handlers(
        theirs.map(|theirs| move |event: &E| theirs.emit(event.clone())),
        move |event: &E| ours.emit(event.clone()),
    );
    Callback::from(move |event: E| handler(&event))
}

/// `compose_callbacks` for plain listeners, usable directly as `onclick` etc.
pub fn compose_listeners<E>(theirs: Option<Callback<E>>, ours: Callback<E>) -> Callback<E>
where
    E: DefaultPrevented + Clone + 'static,
{
    let composed = compose_callbacks(theirs, ours);
    Callback::from(move |event: E| {
        composed.emit(event);
    })
}
