//! Host capability traits.
//!
//! A *host* is any entity that stores element values keyed by definition
//! code. Element accessors are built on top of these traits so the engine
//! never needs to know which entity it is working against.

use super::element::ElementValueMap;

/// Read access to a host's code → values map.
pub trait ElementValueHost {
    /// The backing map, `None` when the host has never stored any value.
    fn element_value_map(&self) -> Option<&ElementValueMap>;
}

/// Write access to a host's code → values map.
pub trait ElementValueHostMut: ElementValueHost {
    /// The backing map slot, so callers can create it on first write.
    fn element_value_map_mut(&mut self) -> &mut Option<ElementValueMap>;
}

macro_rules! impl_element_value_host {
    ($ty:ty, mut) => {
        impl_element_value_host!($ty);

        impl $crate::model::host::ElementValueHostMut for $ty {
            fn element_value_map_mut(
                &mut self,
            ) -> &mut Option<$crate::model::element::ElementValueMap> {
                &mut self.element_values
            }
        }
    };
    ($ty:ty) => {
        impl $crate::model::host::ElementValueHost for $ty {
            fn element_value_map(&self) -> Option<&$crate::model::element::ElementValueMap> {
                self.element_values.as_ref()
            }
        }
    };
}

pub(crate) use impl_element_value_host;
