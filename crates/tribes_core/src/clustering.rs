//! Spatial seeding of the initial population.
//!
//! Candidate cells are sampled independently with the configured fill
//! probability, then partitioned into `k` spatial clusters with Lloyd's
//! k-means. Cluster `i` is later painted with `Tribe::LIVING[i]`, so the
//! order of the returned clusters is significant.

use rand::seq::index;
use rand::Rng;
use tribes_data::{Pair, Point};

/// Half-open coordinate range `[start, end)`.
pub type CoordRange = Pair<usize, usize>;

/// Samples every coordinate of `rows × cols` independently with probability `fill`.
///
/// Points are produced column-major: for each column, the rows in ascending order.
pub fn sample_positions<R: Rng + ?Sized>(
    rows: CoordRange,
    cols: CoordRange,
    fill: f64,
    rng: &mut R,
) -> Vec<Point> {
    let fill = if fill.is_nan() { 0.0 } else { fill.clamp(0.0, 1.0) };
    let (row_start, row_end) = rows.into_inner();
    let (col_start, col_end) = cols.into_inner();

    let mut points = Vec::new();
    for y in col_start..col_end {
        for x in row_start..row_end {
            if rng.gen_bool(fill) {
                points.push(Point::new(x, y));
            }
        }
    }
    points
}

/// Iterative centroid refinement.
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
}

impl KMeans {
    pub fn new(k: usize, max_iterations: usize) -> Self {
        Self {
            k,
            max_iterations: max_iterations.max(1),
        }
    }

    /// Partitions `points` into exactly `k` disjoint, possibly empty, clusters.
    ///
    /// Initial centroids are a uniform random subset of `k` points. When there
    /// are no more points than clusters, each point forms its own cluster.
    pub fn cluster<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> Vec<Vec<Point>> {
        let mut clusters = vec![Vec::new(); self.k];
        if self.k == 0 {
            return clusters;
        }
        if points.len() <= self.k {
            for (cluster, &point) in clusters.iter_mut().zip(points) {
                cluster.push(point);
            }
            return clusters;
        }

        let mut centroids: Vec<Point> = index::sample(rng, points.len(), self.k)
            .into_iter()
            .map(|i| points[i])
            .collect();

        // usize::MAX marks "unassigned" so the first pass always counts as a change.
        let mut assignments = vec![usize::MAX; points.len()];
        let mut iterations = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            let mut changed = false;
            for (slot, point) in assignments.iter_mut().zip(points) {
                let nearest = nearest_centroid(point, &centroids);
                if *slot != nearest {
                    *slot = nearest;
                    changed = true;
                }
            }

            if !changed {
                break;
            }

            for (c, centroid) in centroids.iter_mut().enumerate() {
                let members: Vec<Point> = points
                    .iter()
                    .zip(&assignments)
                    .filter(|&(_, &a)| a == c)
                    .map(|(p, _)| *p)
                    .collect();
                // An empty cluster keeps its previous centroid.
                if let Some(mean) = Point::mean(&members) {
                    *centroid = mean;
                }
            }
        }

        tracing::debug!(
            points = points.len(),
            k = self.k,
            iterations = iterations,
            "k-means finished"
        );

        for (point, &c) in points.iter().zip(&assignments) {
            clusters[c].push(*point);
        }
        clusters
    }
}

/// Index of the closest centroid; ties go to the lowest index.
fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    centroids
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            point
                .distance(a)
                .partial_cmp(&point.distance(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn full_range(rows: usize, cols: usize) -> (CoordRange, CoordRange) {
        (Pair::of(0, rows), Pair::of(0, cols))
    }

    #[test]
    fn test_sample_fill_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (rows, cols) = full_range(6, 7);
        assert!(sample_positions(rows, cols, 0.0, &mut rng).is_empty());
        let all = sample_positions(rows, cols, 1.0, &mut rng);
        assert_eq!(all.len(), 42);
        let unique: HashSet<Point> = all.into_iter().collect();
        assert_eq!(unique.len(), 42);
    }

    #[test]
    fn test_sample_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let points = sample_positions(Pair::of(2, 5), Pair::of(3, 9), 0.5, &mut rng);
        assert!(points
            .iter()
            .all(|p| (2..5).contains(&p.x) && (3..9).contains(&p.y)));
    }

    #[test]
    fn test_clusters_partition_points() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (rows, cols) = full_range(20, 30);
        let points = sample_positions(rows, cols, 0.4, &mut rng);
        let clusters = KMeans::new(3, 300).cluster(&points, &mut rng);

        assert_eq!(clusters.len(), 3);
        let total: usize = clusters.iter().map(Vec::len).sum();
        assert_eq!(total, points.len());
        let unique: HashSet<Point> = clusters.iter().flatten().copied().collect();
        assert_eq!(unique.len(), points.len());
    }

    #[test]
    fn test_separated_blobs_are_recovered() {
        let mut points = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                points.push(Point::new(x, y));
                points.push(Point::new(x + 50, y + 50));
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let clusters = KMeans::new(2, 300).cluster(&points, &mut rng);

        for cluster in &clusters {
            assert_eq!(cluster.len(), 9);
            let near_origin = cluster[0].x < 25;
            assert!(cluster.iter().all(|p| (p.x < 25) == near_origin));
        }
    }

    #[test]
    fn test_fewer_points_than_clusters() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let points = [Point::new(1, 1), Point::new(4, 4)];
        let clusters = KMeans::new(3, 300).cluster(&points, &mut rng);
        assert_eq!(clusters, vec![vec![points[0]], vec![points[1]], vec![]]);

        let clusters = KMeans::new(2, 300).cluster(&[], &mut rng);
        assert_eq!(clusters, vec![Vec::<Point>::new(), Vec::new()]);
    }

    #[test]
    fn test_same_seed_same_clusters() {
        let (rows, cols) = full_range(15, 15);
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let points = sample_positions(rows, cols, 0.3, &mut rng);
            KMeans::new(3, 300).cluster(&points, &mut rng)
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_nearest_centroid_tie_prefers_first() {
        let centroids = [Point::new(0, 0), Point::new(2, 0)];
        assert_eq!(nearest_centroid(&Point::new(1, 0), &centroids), 0);
        assert_eq!(nearest_centroid(&Point::new(2, 1), &centroids), 1);
    }
}
