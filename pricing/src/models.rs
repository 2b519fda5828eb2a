use serde::Deserialize;

pub const GEOCODE_ENDPOINT: &str = "https://api.geoapify.com/v1/geocode/search";
pub const ROUTE_MATRIX_ENDPOINT: &str = "https://api.geoapify.com/v1/routematrix";

#[derive(Deserialize)]
pub struct GeocodeResponse {
    // Zero features means the address did not resolve, not a decode failure.
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
}

#[derive(Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}

#[derive(Deserialize)]
pub struct MatrixResponse {
    #[serde(default)]
    pub sources_to_targets: Vec<Vec<MatrixCell>>,
}

#[derive(Deserialize)]
pub struct MatrixCell {
    pub distance: Option<f64>,
}
