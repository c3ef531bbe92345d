mod clima;

pub use clima::clima;
