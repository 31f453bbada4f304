use crate::presentation::http::middleware::colors::SampledColors;

pub(crate) async fn three_colors(colors: SampledColors) -> String {
    colors.joined()
}
