pub mod get;
pub mod list;

use pokedex_domain::{Nature, Pokemon, Stat};

/// What the commands print for one resource.
pub trait Summary {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
}

macro_rules! impl_summary {
    ($($ty:ty),*) => {
        $(
            impl Summary for $ty {
                fn id(&self) -> u32 {
                    self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_summary!(Nature, Pokemon, Stat);
