pub mod entities;
pub mod mock_data;
pub mod store;
