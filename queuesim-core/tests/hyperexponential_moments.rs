//! Sampling checks of the two-stage hyperexponential generator.

use queuesim_core::{hyperexponential, stream_rng, Hyperexponential, Stream};
use rand_distr::Distribution;

fn moments(draws: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut n, mut sum, mut sum_sq) = (0usize, 0.0, 0.0);
    for x in draws {
        n += 1;
        sum += x;
        sum_sq += x * x;
    }
    let mean = sum / n as f64;
    let var = sum_sq / n as f64 - mean * mean;
    (mean, var / (mean * mean))
}

#[test]
fn cv2_nine_reproduces_mean_and_variance() {
    let law = Hyperexponential::new(1.0, 3.0).unwrap();
    let mut rng = stream_rng(42, Stream::Service);
    let (mean, cv2) = moments((0..1_000_000).map(|_| law.sample(&mut rng)));

    assert!((mean - 1.0).abs() < 0.01, "mean {mean}");
    assert!((cv2 - 9.0).abs() < 0.45, "cv2 {cv2}");
}

#[test]
fn free_function_matches_sampler() {
    let law = Hyperexponential::new(2.0, 5.0).unwrap();
    let mut a = stream_rng(8, Stream::Arrivals);
    let mut b = stream_rng(8, Stream::Arrivals);
    for _ in 0..1_000 {
        let x = hyperexponential(&mut a, 2.0, 5.0).unwrap();
        assert_eq!(x.to_bits(), law.sample(&mut b).to_bits());
        assert!(x >= 0.0);
    }
}

#[test]
fn scales_with_mean() {
    let law = Hyperexponential::new(4.0, 12.0).unwrap();
    let mut rng = stream_rng(5, Stream::Arrivals);
    let (mean, cv2) = moments((0..1_000_000).map(|_| law.sample(&mut rng)));

    assert!((mean - 4.0).abs() < 0.04, "mean {mean}");
    assert!((cv2 - 9.0).abs() < 0.45, "cv2 {cv2}");
}
