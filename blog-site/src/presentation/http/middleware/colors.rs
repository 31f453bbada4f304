use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

pub(crate) const PALETTE: [&str; 8] = [
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "teal",
];

/// Colors picked so far for the current request, in pick order.
#[derive(Debug, Clone, Default)]
pub(crate) struct SampledColors(pub(crate) Vec<&'static str>);

impl SampledColors {
    pub(crate) fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl<S> FromRequestParts<S> for SampledColors
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<SampledColors>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Appends one random palette color to the request's `SampledColors`.
pub(crate) async fn sample_color(mut request: Request, next: Next) -> Response {
    let mut colors = request
        .extensions_mut()
        .remove::<SampledColors>()
        .unwrap_or_default();
    colors.0.push(pick_color());
    request.extensions_mut().insert(colors);

    next.run(request).await
}

fn pick_color() -> &'static str {
    PALETTE[rand::random_range(0..PALETTE.len())]
}
