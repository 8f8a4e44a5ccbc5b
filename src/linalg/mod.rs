mod lu;

pub use lu::lu_solve;
