pub mod back_button;
