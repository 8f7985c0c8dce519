mod country;
mod province;

pub use country::Country;
pub use province::Province;
