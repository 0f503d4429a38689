use proptest::prelude::*;
use proptest::sample::Index;

use anchorpath_finder::{collapse_loops, find_path_to_anchor, FinderConfig, PathFinder};
use anchorpath_registry::{ConverterRegistry, MemoryRegistry};
use anchorpath_types::{ConverterId, Path, Role, Token};

const ANCHOR: u64 = 1;

fn token(node: usize) -> Token {
    if node == 0 {
        Token::from_low_u64(ANCHOR)
    } else {
        Token::from_low_u64(100 + node as u64)
    }
}

fn pool(node: usize) -> Token {
    Token::from_low_u64(1_000 + node as u64)
}

fn island(i: usize) -> Token {
    Token::from_low_u64(5_000 + i as u64)
}

/// A tree of two-connector pools rooted at the anchor token, plus a pair of
/// tokens linked to each other but not to the tree.
fn tree_registry(edges: &[(Index, bool)]) -> (MemoryRegistry, usize) {
    let mut registry = MemoryRegistry::new();
    for (i, (parent, flip)) in edges.iter().enumerate() {
        let node = i + 1;
        let parent = parent.index(node);
        let connectors = if *flip {
            vec![token(parent), token(node)]
        } else {
            vec![token(node), token(parent)]
        };
        registry
            .add_converter(ConverterId::from_low_u64(node as u64), pool(node), connectors)
            .unwrap();
    }
    registry
        .add_converter(
            ConverterId::from_low_u64(9_999),
            Token::from_low_u64(9_999),
            vec![island(0), island(1)],
        )
        .unwrap();
    (registry, edges.len())
}

fn edges() -> impl Strategy<Value = Vec<(Index, bool)>> {
    prop::collection::vec((any::<Index>(), any::<bool>()), 1..12)
}

/// Every hop `a → anchor → b` must be a conversion the anchor's converter offers.
fn hops_are_valid(registry: &MemoryRegistry, path: &Path) -> bool {
    path.steps().windows(3).step_by(2).all(|hop| {
        let anchor = hop[1].token;
        let Ok(owner) = registry.owner_of(&anchor) else {
            return false;
        };
        let connectors = registry.connector_tokens(&owner).unwrap_or_default();
        [hop[0].token, hop[2].token]
            .iter()
            .all(|t| *t == anchor || connectors.contains(t))
    })
}

proptest! {
    /// A token's route to itself is the single-element path.
    #[test]
    fn route_to_self_is_trivial(edges in edges(), pick in any::<Index>()) {
        let (registry, n) = tree_registry(&edges);
        let t = token(pick.index(n + 1));
        prop_assert_eq!(find_path_to_anchor(t, t, &registry, 32).unwrap(), Path::single(t));

        let finder = PathFinder::new(&registry, token(0), FinderConfig::default()).unwrap();
        prop_assert_eq!(finder.find_path(t, t).unwrap(), Path::single(t));
    }

    /// Every tree token reaches the anchor along valid conversions.
    #[test]
    fn tree_tokens_reach_anchor(edges in edges(), pick in any::<Index>()) {
        let (registry, n) = tree_registry(&edges);
        let t = token(pick.index(n + 1));
        let path = find_path_to_anchor(t, token(0), &registry, 32).unwrap();
        prop_assert_eq!(path.first(), Some(t));
        prop_assert_eq!(path.last(), Some(token(0)));
        prop_assert!(path.is_well_formed());
        prop_assert!(hops_are_valid(&registry, &path));
    }

    /// Swapping source and target reverses the route.
    #[test]
    fn find_path_is_symmetric(edges in edges(), a in any::<Index>(), b in any::<Index>()) {
        let (registry, n) = tree_registry(&edges);
        let (a, b) = (token(a.index(n + 1)), token(b.index(n + 1)));
        let finder = PathFinder::new(&registry, token(0), FinderConfig::default()).unwrap();

        let forward = finder.find_path(a, b).unwrap();
        let backward = finder.find_path(b, a).unwrap();
        prop_assert_eq!(forward.clone(), backward.reversed());
        prop_assert_eq!(forward.first(), Some(a));
        prop_assert_eq!(forward.last(), Some(b));
        prop_assert!(hops_are_valid(&registry, &forward));
    }

    /// Tokens cut off from the anchor have no route to or from anything.
    #[test]
    fn unreachable_token_has_no_path(edges in edges(), pick in any::<Index>()) {
        let (registry, n) = tree_registry(&edges);
        let t = token(pick.index(n + 1));
        let finder = PathFinder::new(&registry, token(0), FinderConfig::default()).unwrap();

        prop_assert!(finder.find_path(island(0), t).unwrap().is_empty());
        prop_assert!(finder.find_path(t, island(1)).unwrap().is_empty());
        prop_assert!(finder.find_path(island(0), island(1)).unwrap().is_empty());
    }

    /// Merged routes are already compact, and compaction is idempotent.
    #[test]
    fn merged_paths_are_compact(edges in edges(), a in any::<Index>(), b in any::<Index>()) {
        let (registry, n) = tree_registry(&edges);
        let (a, b) = (token(a.index(n + 1)), token(b.index(n + 1)));
        let finder = PathFinder::new(&registry, token(0), FinderConfig::default()).unwrap();

        let path = finder.find_path(a, b).unwrap();
        prop_assert_eq!(collapse_loops(&path), path.clone());
        prop_assert_eq!(path.steps().first().map(|s| s.role), Some(Role::Token));
    }

    /// Compaction of arbitrary alternating sequences is idempotent.
    #[test]
    fn collapse_is_idempotent(ids in prop::collection::vec(1u64..6, 0..15)) {
        let path = Path::from_tokens(ids.into_iter().map(Token::from_low_u64));
        let once = collapse_loops(&path);
        prop_assert_eq!(collapse_loops(&once), once);
    }
}
