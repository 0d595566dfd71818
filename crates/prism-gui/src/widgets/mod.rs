//! Built-in widgets, declared through methods on [`Ui`](crate::Ui).

mod checkbox;
mod color_edit;
mod color_picker;
mod label;
mod slider;
