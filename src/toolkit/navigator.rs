//! Graph routines over undirected road networks.
//!
//! Vertices are `0..n`. Every road referencing a vertex outside that range
//! is rejected with [`ToolkitError::VertexOutOfRange`] before any work.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::ToolkitError;

/// A road with separate gold and silver tolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub u: usize,
    pub v: usize,
    pub gold: u64,
    pub silver: u64,
}

impl Road {
    pub fn new(u: usize, v: usize, gold: u64, silver: u64) -> Self {
        Self { u, v, gold, silver }
    }
}

/// A road with a single travel distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedRoad {
    pub u: usize,
    pub v: usize,
    pub weight: u64,
}

impl WeightedRoad {
    pub fn new(u: usize, v: usize, weight: u64) -> Self {
        Self { u, v, weight }
    }
}

fn check_vertex(vertex: usize, n: usize) -> Result<usize, ToolkitError> {
    if vertex < n {
        Ok(vertex)
    } else {
        Err(ToolkitError::VertexOutOfRange { vertex, n })
    }
}

/// Whether `dst` can be reached from `src` (breadth-first)
///
/// ```
/// use arcade_ledger::toolkit::path_exists;
///
/// let edges = [(0, 1), (1, 2), (3, 4)];
/// assert_eq!(path_exists(5, &edges, 0, 2), Ok(true));
/// assert_eq!(path_exists(5, &edges, 0, 4), Ok(false));
/// ```
pub fn path_exists(
    n: usize,
    edges: &[(usize, usize)],
    src: usize,
    dst: usize,
) -> Result<bool, ToolkitError> {
    check_vertex(src, n)?;
    check_vertex(dst, n)?;

    let mut adjacency = vec![Vec::new(); n];
    for &(u, v) in edges {
        adjacency[check_vertex(u, n)?].push(v);
        adjacency[check_vertex(v, n)?].push(u);
    }

    if src == dst {
        return Ok(true);
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([src]);
    visited[src] = true;

    while let Some(u) = queue.pop_front() {
        for &v in &adjacency[u] {
            if v == dst {
                return Ok(true);
            }
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    Ok(false)
}

/// Cheapest cost to connect all `n` cities (Prim's algorithm)
///
/// A road costs `gold * gold_rate + silver * silver_rate`. Returns
/// `Ok(None)` when some city cannot be connected.
///
/// ```
/// use arcade_ledger::toolkit::{min_bribe_cost, Road};
///
/// let roads = [Road::new(0, 1, 0, 0), Road::new(1, 2, 5, 0), Road::new(0, 2, 10, 0)];
/// assert_eq!(min_bribe_cost(3, 1, 1, &roads), Ok(Some(5)));
/// ```
pub fn min_bribe_cost(
    n: usize,
    gold_rate: u64,
    silver_rate: u64,
    roads: &[Road],
) -> Result<Option<u64>, ToolkitError> {
    let mut adjacency: Vec<Vec<(usize, u64)>> = vec![Vec::new(); n];
    for road in roads {
        let u = check_vertex(road.u, n)?;
        let v = check_vertex(road.v, n)?;
        let gold = road.gold.checked_mul(gold_rate);
        let silver = road.silver.checked_mul(silver_rate);
        let cost = gold
            .zip(silver)
            .and_then(|(g, s)| g.checked_add(s))
            .ok_or(ToolkitError::CostOverflow)?;
        adjacency[u].push((v, cost));
        adjacency[v].push((u, cost));
    }

    if n == 0 {
        return Ok(Some(0));
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![u64::MAX; n];
    let mut heap = BinaryHeap::from([Reverse((0u64, 0usize))]);
    best[0] = 0;

    let mut total: u64 = 0;
    let mut joined = 0;

    while let Some(Reverse((cost, u))) = heap.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;
        joined += 1;
        total = total.checked_add(cost).ok_or(ToolkitError::CostOverflow)?;

        for &(v, edge_cost) in &adjacency[u] {
            if !in_tree[v] && edge_cost < best[v] {
                best[v] = edge_cost;
                heap.push(Reverse((edge_cost, v)));
            }
        }
    }

    Ok((joined == n).then_some(total))
}

/// Sum of shortest distances over all unordered reachable city pairs,
/// written in binary (Floyd-Warshall)
///
/// Unreachable pairs contribute nothing. Parallel roads keep the shorter
/// one.
///
/// ```
/// use arcade_ledger::toolkit::{sum_min_distances_binary, WeightedRoad};
///
/// let roads = [WeightedRoad::new(0, 1, 1), WeightedRoad::new(1, 2, 2)];
/// // 1 + 2 + 3 = 6
/// assert_eq!(sum_min_distances_binary(3, &roads).unwrap(), "110");
/// ```
pub fn sum_min_distances_binary(
    n: usize,
    roads: &[WeightedRoad],
) -> Result<String, ToolkitError> {
    let mut dist: Vec<Vec<Option<u128>>> = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }

    for road in roads {
        let u = check_vertex(road.u, n)?;
        let v = check_vertex(road.v, n)?;
        if u == v {
            continue;
        }
        let weight = u128::from(road.weight);
        let shorter = dist[u][v].map_or(weight, |d| d.min(weight));
        dist[u][v] = Some(shorter);
        dist[v][u] = Some(shorter);
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..n {
                let Some(kj) = dist[k][j] else { continue };
                let through = ik + kj;
                if dist[i][j].map_or(true, |d| through < d) {
                    dist[i][j] = Some(through);
                }
            }
        }
    }

    let total: u128 = (0..n)
        .flat_map(|i| (0..i).map(move |j| (i, j)))
        .filter_map(|(i, j)| dist[i][j])
        .sum();

    Ok(format!("{:b}", total))
}
