pub mod country;
pub mod pair;
pub mod place;

pub use country::{Country, CountryFragment, Endpoint, RenderCountry};
pub use pair::ValidPair;
pub use place::{GeoPoint, MapPoint, Place, PlaceLocation, PlaceRecord};
