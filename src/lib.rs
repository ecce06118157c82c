pub mod numerics;

pub use numerics::error::{NumericsError, NumericsResult};
pub use numerics::types::mat4::Matrix4x4;
pub use numerics::types::matrix::Matrix;
pub use numerics::types::traits::{FloatingPoint, NumericContainer};
pub use numerics::types::vector::{Vector2, Vector3, Vector4};
