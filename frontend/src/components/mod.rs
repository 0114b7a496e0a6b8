pub mod dialog;
pub mod portal;

pub use dialog::{Dialog, DialogContent, DialogInner, DialogOverlay};
pub use portal::Portal;
