//! K-means quantization regression test
//!
//! Run with:
//! ```
//! cargo test -p pbn-color --test kmeans_reg
//! ```

use pbn_color::{KMeansOptions, kmeans_quantize};
use pbn_core::{Color, PixelBuffer};
use pbn_test::{RegParams, two_tone_columns, uniform_buffer};

#[test]
fn kmeans_reg() {
    let mut rp = RegParams::new("kmeans");

    // -----------------------------------------------------------
    // The canonical 2x2 scenario: two black and two white pixels,
    // k = 2, must converge to a black/white palette (either order)
    // -----------------------------------------------------------
    let pix = PixelBuffer::from_vec(
        2,
        2,
        vec![Color::BLACK, Color::BLACK, Color::WHITE, Color::WHITE],
    )
    .unwrap();
    let quant = kmeans_quantize(&pix, &KMeansOptions::for_colors(2).with_seed(1)).unwrap();

    rp.compare_values(2.0, quant.palette.len() as f64, 0.0);
    let colors: Vec<Color> = quant.palette.iter().collect();
    assert!(colors.contains(&Color::BLACK), "palette misses black");
    assert!(colors.contains(&Color::WHITE), "palette misses white");

    let distinct_indices = {
        let mut v: Vec<u32> = quant.map.as_slice().to_vec();
        v.sort_unstable();
        v.dedup();
        v.len()
    };
    rp.compare_values(2.0, distinct_indices as f64, 0.0);
    // Same-colored pixels share an index
    assert_eq!(quant.map.value(0, 0), quant.map.value(1, 0));
    assert_eq!(quant.map.value(0, 1), quant.map.value(1, 1));

    // -----------------------------------------------------------
    // Termination and ranges for a spread of k values
    // -----------------------------------------------------------
    let buf = two_tone_columns(16, 16, Color::new(200, 30, 30), Color::new(30, 30, 200));
    for k in [1u32, 3, 5, 8, 15] {
        let q = kmeans_quantize(&buf, &KMeansOptions::for_colors(k).with_seed(42)).unwrap();
        rp.compare_values(k as f64, q.palette.len() as f64, 0.0);
        assert!(
            q.map.as_slice().iter().all(|&i| i < k),
            "index out of range for k = {k}"
        );
    }

    // -----------------------------------------------------------
    // Seeded determinism: identical runs produce identical output
    // -----------------------------------------------------------
    let options = KMeansOptions::for_colors(4).with_seed(7);
    let a = kmeans_quantize(&buf, &options).unwrap();
    let b = kmeans_quantize(&buf, &options).unwrap();
    rp.compare_grids(&a.map, &b.map);
    assert_eq!(a.palette, b.palette);

    // -----------------------------------------------------------
    // Degenerate inputs
    // -----------------------------------------------------------
    // k above the pixel count: every palette slot is the only color
    let tiny = uniform_buffer(2, 2, Color::new(9, 9, 9));
    let q = kmeans_quantize(&tiny, &KMeansOptions::for_colors(10).with_seed(3)).unwrap();
    rp.compare_values(10.0, q.palette.len() as f64, 0.0);
    assert!(q.palette.iter().all(|c| c == Color::new(9, 9, 9)));

    // k = 0 fails fast
    assert!(kmeans_quantize(&tiny, &KMeansOptions::for_colors(0)).is_err());

    assert!(rp.cleanup(), "kmeans regression test failed");
}
