use crate::{ops::*, *};

mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;
