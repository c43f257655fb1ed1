mod es;
mod quadrature;

pub use crate::common::{QuadratureRule, SpreadKernel};
pub use es::EsKernel;
pub use quadrature::GaussLegendre;
