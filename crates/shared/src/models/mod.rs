pub mod api;
pub mod cwl;
pub mod task;
pub mod view;

pub use task::TesState;
pub use task::TesTask;
pub use view::TesView;
