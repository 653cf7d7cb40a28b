mod mock_id_supplier;

pub use mock_id_supplier::{FixedIdSupplier, RecordingIdSupplier};
