//! Tri-state property access.
//!
//! Every formatting property in the model is an `Option`: `None` means "not set
//! on this object". Renderers read properties through [`Layered`], which pairs
//! the object's own (local) format with its effective format (after style
//! inheritance), and get back a [`Prop`] telling them where the value came from.

/// Resolution state of a single property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prop<T> {
    /// Neither the object nor its styles set the property
    Unset,
    /// The value comes from the style chain
    Inherited(T),
    /// The object sets the value itself
    Explicit(T),
}

impl<T> Prop<T> {
    /// Build from a local and an effective value.
    #[inline]
    pub fn resolve(local: Option<T>, effective: Option<T>) -> Self {
        match (local, effective) {
            (Some(v), _) => Prop::Explicit(v),
            (None, Some(v)) => Prop::Inherited(v),
            (None, None) => Prop::Unset,
        }
    }

    /// Value to emit: inherited values only count when `use_effective` is set.
    #[inline]
    pub fn get(self, use_effective: bool) -> Option<T> {
        match self {
            Prop::Explicit(v) => Some(v),
            Prop::Inherited(v) if use_effective => Some(v),
            _ => None,
        }
    }
}

/// A local format together with its effective (style-resolved) counterpart.
#[derive(Debug)]
pub struct Layered<'a, F> {
    pub local: &'a F,
    pub effective: &'a F,
}

impl<F> Clone for Layered<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Layered<'_, F> {}

impl<'a, F> Layered<'a, F> {
    #[inline]
    pub fn new(local: &'a F, effective: &'a F) -> Self {
        Self { local, effective }
    }

    /// View a format with no inheritance: every set value is explicit.
    #[inline]
    pub fn raw(format: &'a F) -> Self {
        Self {
            local: format,
            effective: format,
        }
    }

    /// Look up one property on both layers.
    #[inline]
    pub fn prop<T>(&self, pick: impl Fn(&'a F) -> Option<T>) -> Prop<T> {
        Prop::resolve(pick(self.local), pick(self.effective))
    }

    /// Narrow both layers to a nested format.
    #[inline]
    pub fn map<G>(&self, pick: impl Fn(&'a F) -> &'a G) -> Layered<'a, G> {
        Layered {
            local: pick(self.local),
            effective: pick(self.effective),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_states() {
        assert_eq!(Prop::resolve(Some(1), Some(2)), Prop::Explicit(1));
        assert_eq!(Prop::resolve(None, Some(2)), Prop::Inherited(2));
        assert_eq!(Prop::<i32>::resolve(None, None), Prop::Unset);
    }

    #[test]
    fn test_get_respects_effective_flag() {
        assert_eq!(Prop::Inherited(3).get(true), Some(3));
        assert_eq!(Prop::Inherited(3).get(false), None);
        assert_eq!(Prop::Explicit(3).get(false), Some(3));
        assert!(Prop::<u8>::Unset.get(true).is_none());
    }

    #[test]
    fn test_layered_prop() {
        struct F {
            a: Option<i32>,
        }
        let local = F { a: None };
        let effective = F { a: Some(7) };
        let layered = Layered::new(&local, &effective);
        assert_eq!(layered.prop(|f| f.a), Prop::Inherited(7));
        assert_eq!(Layered::raw(&effective).prop(|f| f.a), Prop::Explicit(7));
    }
}
