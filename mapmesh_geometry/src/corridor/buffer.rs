use crate::ring::ring_to_line_string;
use geo::{
	MultiPolygon,
	algorithm::buffer::{Buffer, BufferStyle, LineCap, LineJoin},
};

/// Buffers a centerline with flat caps and mitred joins.
pub(super) fn buffer_centerline(centerline: &[[f64; 2]], half_width: f64, mitre_limit: f64) -> MultiPolygon<f64> {
	let style = BufferStyle::new(half_width)
		.line_cap(LineCap::Butt)
		.line_join(mitre_join(mitre_limit));
	ring_to_line_string(centerline).buffer_with_style(style)
}

/// Join for a mitre `limit` given as the ratio of mitre length to half width.
///
/// The buffer expects the smallest corner angle that still gets a full mitre. A corner of
/// angle `a` has a mitre ratio of `1 / sin(a / 2)`, so the limit translates to
/// `2 * asin(1 / limit)`. Limits of 1 or less never allow a mitre.
pub(super) fn mitre_join(limit: f64) -> LineJoin<f64> {
	if limit.is_nan() || limit <= 1.0 {
		return LineJoin::Bevel;
	}
	LineJoin::Miter(2.0 * (1.0 / limit).asin())
}
