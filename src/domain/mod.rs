//! Plain, serializable records that make up an inquiry draft, plus the
//! reference entities used to resolve identifiers for display.

pub mod common;
pub mod customer;
pub mod draft;
pub mod field;
pub mod options;
pub mod reference;
pub mod reservation;
pub mod submission;

pub use common::{Displayable, Identified, NamedEntity};
pub use customer::CustomerInfo;
pub use draft::{ClearSelection, DraftState, Step};
pub use field::FieldId;
pub use options::OtherOptions;
pub use reference::{ReferenceCatalog, ReferenceEntity, ReferenceKind};
pub use reservation::{InitialSeed, ReservationDetails, DEFAULT_PASSENGERS, MAX_PASSENGERS};
pub use submission::{BookingStatus, InquirySubmission};
