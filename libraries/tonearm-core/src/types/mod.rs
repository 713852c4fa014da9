mod container;
mod record;
mod value;

pub use container::{supported_extension, ContainerKind, ParsedContainer, SUPPORTED_EXTENSIONS};
pub use record::{Bucket, FieldValue, Scalar, TranslatedRecord};
pub use value::{EmbeddedPicture, NativeTags, RawValue};
