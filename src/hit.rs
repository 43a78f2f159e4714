use crate::Ray;

pub trait Intersect {
    /// Ray parameter of the visible intersection, or `None` for a miss.
    fn intersect(&self, ray: Ray) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index into the primitive slice that was scanned.
    pub index: usize,
    pub distance: f64,
}

/// Brute-force scan for the nearest intersection along `ray`.
///
/// Candidates must be strictly closer than the best so far to replace it, so
/// on an exact tie the lowest index wins.
pub fn nearest<T: Intersect>(ray: Ray, objects: &[T]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    let mut min_t = f64::INFINITY;
    for (index, object) in objects.iter().enumerate() {
        if let Some(t) = object.intersect(ray) {
            if t < min_t {
                min_t = t;
                best = Some(Hit { index, distance: t });
            }
        }
    }
    best
}
