// Entity Models
// Award rows, movie rows, and the joined output row

pub mod awarded_movie;
pub mod movie;
pub mod oscar_info;

pub use awarded_movie::AwardedMovie;
pub use movie::Movie;
pub use oscar_info::OscarInfo;
