use crate::curve::{Spline, SplineEvalResult};

/// `count` results evenly spaced by arc length, from the start to the end of the curve.
pub fn sample_uniform(spline: &Spline, count: usize) -> Vec<SplineEvalResult> {
    match count {
        0 => Vec::new(),
        1 => vec![spline.evaluate_at_distance(0.0)],
        _ => {
            let length = spline.get_length();
            let step = length / (count - 1) as f32;
            (0..count)
                .map(|i| {
                    // pin the last sample so a Loop does not wrap back to the start
                    let t = if i == count - 1 {
                        1.0
                    } else {
                        spline.get_t_at_distance(step * i as f32)
                    };
                    spline.evaluate(t)
                })
                .collect()
        }
    }
}

/// Sum of angles (radians) between consecutive frame normals over `samples`
/// steps. A sudden jump here means the frame flipped.
pub fn calculate_total_twist(spline: &Spline, samples: usize) -> f32 {
    if spline.point_count() < 2 || samples == 0 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut prev = spline.evaluate(0.0).normal;
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let normal = spline.evaluate(t).normal;
        total += prev.dot(normal).clamp(-1.0, 1.0).acos();
        prev = normal;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve, EndMode, SplinePoint};
    use crate::math::Float3;
    use approx::assert_relative_eq;

    fn wavy() -> Spline {
        Spline::from_points(
            Curve::default(),
            vec![
                SplinePoint::new(Float3::new(0.0, 0.0, 0.0)),
                SplinePoint::new(Float3::new(2.0, 0.0, 6.0)),
                SplinePoint::new(Float3::new(10.0, 0.0, 7.0)),
                SplinePoint::new(Float3::new(12.0, 0.0, 0.0)),
            ],
        )
    }

    #[test]
    fn uniform_samples_are_equidistant_along_curve() {
        let spline = wavy();
        let samples = sample_uniform(&spline, 21);
        assert_eq!(samples.len(), 21);
        let step = spline.get_length() / 20.0;
        let lengths: Vec<f32> = samples
            .iter()
            .map(|s| spline.get_length_to(spline.find_nearest_t(s.position)))
            .collect();
        for pair in lengths.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], step, epsilon = 2e-2);
        }
    }

    #[test]
    fn uniform_samples_span_the_curve() {
        let spline = wavy();
        let samples = sample_uniform(&spline, 5);
        assert_eq!(samples[0].position, Float3::ZERO);
        assert_relative_eq!(samples[4].position.x, 12.0, epsilon = 1e-4);

        let mut looped = wavy();
        looped.end_mode = EndMode::Loop;
        let samples = sample_uniform(&looped, 5);
        assert_relative_eq!(samples[4].position.x, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn uniform_sample_edge_counts() {
        let spline = wavy();
        assert!(sample_uniform(&spline, 0).is_empty());
        let single = sample_uniform(&spline, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].position, Float3::ZERO);
    }

    #[test]
    fn flat_curve_has_no_twist() {
        assert_relative_eq!(calculate_total_twist(&wavy(), 50), 0.0, epsilon = 1e-2);
    }

    #[test]
    fn roll_adds_twist() {
        let spline = Spline::from_points(
            Curve::Linear,
            vec![
                SplinePoint::new(Float3::ZERO),
                SplinePoint::new(Float3::new(10.0, 0.0, 0.0)).with_roll(1.0),
            ],
        );
        assert_relative_eq!(calculate_total_twist(&spline, 20), 1.0, epsilon = 1e-3);
        assert_eq!(calculate_total_twist(&Spline::default(), 20), 0.0);
        assert_eq!(calculate_total_twist(&spline, 0), 0.0);
    }
}
