use once_cell::sync::Lazy;
use sliderpath::Vector2;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({(random()-0.5)*i*100}, {(random()-0.5)*i*100})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    (   0.0,      0.0  ),
    ( -29.734,   44.984),
    ( -52.560,   42.885),
    ( 142.777,   -2.652),
    ( 198.032,  -67.824),
    (  44.863,  -91.328),
    (-251.139,  -79.100),
    (-310.479,  -59.318),
    (-116.022, -295.591),
    (-107.946,   78.888),
];

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
#[allow(non_snake_case)]
pub struct Curves {
    pub LINEAR: Vec<Vec<Vector2>>,
    pub QUADRATIC: Vec<Vec<Vector2>>,
    pub CUBIC: Vec<Vec<Vector2>>,
    pub HIGHER: Vec<Vec<Vector2>>,
}

fn pick(indices: &[usize]) -> Vec<Vector2> {
    indices
        .iter()
        .map(|&i| Vector2::new(POINTS[i].0, POINTS[i].1))
        .collect()
}

impl Curves {
    pub fn new() -> Curves {
        Curves {
            LINEAR:    vec![
                pick(&[0, 1]),
                pick(&[2, 3]),
                pick(&[4, 5]),
                pick(&[6, 7]),
                pick(&[8, 9]),
            ],
            QUADRATIC: vec![
                pick(&[0, 1, 2]),
                pick(&[2, 3, 4]),
                pick(&[4, 6, 8]),
                pick(&[1, 3, 5]),
                pick(&[5, 7, 9]),
            ],
            CUBIC:     vec![
                pick(&[0, 1, 2, 3]),
                pick(&[2, 3, 4, 5]),
                pick(&[4, 5, 6, 7]),
                pick(&[6, 7, 8, 9]),
                pick(&[0, 4, 2, 6]),
            ],
            HIGHER:    vec![
                pick(&[0, 1, 2, 3, 4]),
                pick(&[2, 3, 4, 5, 6, 7]),
                pick(&[4, 5, 6, 7, 8, 9, 0]),
                pick(&[0, 2, 4, 6, 8, 1, 3, 5, 7, 9]),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&Vec<Vector2>> {
        self.LINEAR.iter()
            .chain(self.QUADRATIC.iter())
            .chain(self.CUBIC.iter())
            .chain(self.HIGHER.iter())
    }
}
