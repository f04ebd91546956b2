//! Reusable UI pieces composed by `ui::draw_ui`.

pub mod help;
pub mod inventory_table;
pub mod title_bar;
pub mod wizard_form;

pub use help::HelpOverlay;
pub use inventory_table::InventoryTable;
pub use title_bar::TitleBar;
pub use wizard_form::WizardForm;
