mod dashboard;
pub use dashboard::Dashboard;

mod explorer;
pub use explorer::{Batches, Blocks, Transactions};

mod resources;
pub use resources::{Decrypt, VerifiedData};
