pub mod cell_editing;
