//! Element references that can be forwarded to more than one owner.
//!
//! A component that needs its own handle on a DOM node while also forwarding
//! that node to whoever rendered it composes the refs and assigns once.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{DialogError, Result};

/// A reference sink: either a callback receiving the value, or a shared
/// holder whose content is overwritten.
pub enum Ref<T> {
    Callback(Rc<dyn Fn(Option<T>)>),
    Holder(Rc<RefCell<Option<T>>>),
}

impl<T: 'static> Ref<T> {
    pub fn callback(f: impl Fn(Option<T>) + 'static) -> Self {
        Ref::Callback(Rc::new(f))
    }
}

impl<T> Ref<T> {
    /// Create an empty holder sink
    pub fn holder() -> Self {
        Ref::Holder(Rc::new(RefCell::new(None)))
    }

    /// Current value of a holder sink. Callback sinks keep nothing.
    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Ref::Callback(_) => None,
            Ref::Holder(cell) => cell.try_borrow().ok().and_then(|slot| slot.clone()),
        }
    }
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        match self {
            Ref::Callback(f) => Ref::Callback(Rc::clone(f)),
            Ref::Holder(cell) => Ref::Holder(Rc::clone(cell)),
        }
    }
}

// Identity, not content: two refs are equal when they point at the same sink.
impl<T> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ref::Callback(a), Ref::Callback(b)) => Rc::ptr_eq(a, b),
            (Ref::Holder(a), Ref::Holder(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ref::Callback(_) => f.write_str("Callback(<fn>)"),
            Ref::Holder(cell) => f.debug_tuple("Holder").field(cell).finish(),
        }
    }
}

/// Pass or assign a value to a single ref. An absent ref is a no-op.
pub fn assign_ref<T: fmt::Debug>(target: Option<&Ref<T>>, value: Option<T>) -> Result<()> {
    let Some(target) = target else {
        return Ok(());
    };

    match target {
        Ref::Callback(f) => {
            f(value);
            Ok(())
        }
        Ref::Holder(cell) => match cell.try_borrow_mut() {
            Ok(mut slot) => {
                *slot = value;
                Ok(())
            }
            Err(_) => Err(DialogError::RefAssign {
                value: format!("{:?}", value),
                target: format!("{:?}", target),
            }),
        },
    }
}

/// Several refs behaving as one
pub struct ComposedRef<T> {
    refs: Vec<Ref<T>>,
}

impl<T: Clone + fmt::Debug> ComposedRef<T> {
    /// Assign `value` to every constituent ref, in order. Stops at the first
    /// sink that refuses the value.
    pub fn assign(&self, value: Option<T>) -> Result<()> {
        for target in &self.refs {
            assign_ref(Some(target), value.clone())?;
        }
        Ok(())
    }
}

impl<T> ComposedRef<T> {
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

impl<T> Clone for ComposedRef<T> {
    fn clone(&self) -> Self {
        Self {
            refs: self.refs.clone(),
        }
    }
}

impl<T> PartialEq for ComposedRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.refs == other.refs
    }
}

impl<T: fmt::Debug> fmt::Debug for ComposedRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.refs).finish()
    }
}

/// Merge refs into one. Absent entries are skipped; with nothing left the
/// result assigns nowhere.
pub fn compose_refs<T, I>(refs: I) -> ComposedRef<T>
where
    I: IntoIterator<Item = Option<Ref<T>>>,
{
    ComposedRef {
        refs: refs.into_iter().flatten().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sink_receives_value_in_order() {
        let log = Rc::new(RefCell::new(Vec::<(usize, Option<u32>)>::new()));
        let sinks: Vec<Option<Ref<u32>>> = (0..4)
            .map(|index| {
                let log = Rc::clone(&log);
                Some(Ref::callback(move |value| log.borrow_mut().push((index, value))))
            })
            .collect();

        let composed = compose_refs(sinks);
        composed.assign(Some(7)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![(0, Some(7)), (1, Some(7)), (2, Some(7)), (3, Some(7))]
        );
    }

    #[test]
    fn test_holders_and_callbacks_mixed() {
        let first = Ref::holder();
        let second = Ref::holder();
        let seen = Rc::new(RefCell::new(None));
        let callback = {
            let seen = Rc::clone(&seen);
            Ref::callback(move |value| *seen.borrow_mut() = value)
        };

        let composed = compose_refs([Some(first.clone()), Some(callback), Some(second.clone())]);
        composed.assign(Some("node".to_string())).unwrap();

        assert_eq!(first.current().as_deref(), Some("node"));
        assert_eq!(second.current().as_deref(), Some("node"));
        assert_eq!(seen.borrow().as_deref(), Some("node"));

        composed.assign(None).unwrap();
        assert_eq!(first.current(), None);
        assert_eq!(*seen.borrow(), None);
    }

    #[test]
    fn test_absent_refs_are_skipped() {
        let holder = Ref::holder();
        let composed = compose_refs([None, Some(holder.clone()), None]);
        assert_eq!(composed.len(), 1);

        composed.assign(Some(1u8)).unwrap();
        assert_eq!(holder.current(), Some(1));
    }

    #[test]
    fn test_empty_composition_is_noop() {
        let composed: ComposedRef<u8> = compose_refs(Vec::new());
        assert!(composed.is_empty());
        assert!(composed.assign(Some(3)).is_ok());
    }

    #[test]
    fn test_assign_to_absent_ref_is_noop() {
        assert!(assign_ref::<u8>(None, Some(1)).is_ok());
    }

    #[test]
    fn test_borrowed_holder_rejects_assignment() {
        let holder: Ref<u32> = Ref::holder();
        let Ref::Holder(cell) = &holder else {
            unreachable!()
        };
        let _guard = cell.borrow();

        let err = assign_ref(Some(&holder), Some(5)).unwrap_err();
        match &err {
            DialogError::RefAssign { value, target } => {
                assert_eq!(value, "Some(5)");
                assert!(target.starts_with("Holder("));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Cannot assign value \"Some(5)\" to ref"));
    }

    #[test]
    fn test_failing_sink_stops_later_assignments() {
        let blocked: Ref<u32> = Ref::holder();
        let later = Ref::holder();
        let composed = compose_refs([Some(blocked.clone()), Some(later.clone())]);

        let Ref::Holder(cell) = &blocked else {
            unreachable!()
        };
        let _guard = cell.borrow_mut();

        assert!(composed.assign(Some(9)).is_err());
        assert_eq!(later.current(), None);
    }

    #[test]
    fn test_ref_equality_is_identity() {
        let a: Ref<u8> = Ref::holder();
        let b: Ref<u8> = Ref::holder();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(
            compose_refs([Some(a.clone())]),
            compose_refs([Some(a)])
        );
    }
}
