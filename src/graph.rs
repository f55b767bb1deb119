// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

struct MyHasher(u64);

impl std::hash::Hasher for MyHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (std::num::Wrapping(self.0) * std::num::Wrapping(3467)).0 ^ (!b as u64);
        }
    }
}

impl Default for MyHasher {
    fn default() -> MyHasher {
        MyHasher(0)
    }
}

type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;

pub type NodeIndex = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arc {
    pub tile: u8,
    pub target: NodeIndex,
}

#[derive(Clone, Debug)]
struct Node {
    arcs: Vec<Arc>, // sorted by tile
    accepts: bool,
    id: u32, // diagnostics only, never compared
}

impl Node {
    fn new(id: u32) -> Self {
        Self {
            arcs: Vec::new(),
            accepts: false,
            id,
        }
    }
}

// Two nodes with the same signature recognize the same suffixes once their
// children are canonical.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Signature {
    accepts: bool,
    arcs: Box<[Arc]>,
}

impl Signature {
    fn of(node: &Node) -> Self {
        Self {
            accepts: node.accepts,
            arcs: node.arcs.clone().into_boxed_slice(),
        }
    }
}

// Built as a trie, then minimized in place into a DAWG. Once minimized, the
// nodes are in post-order (every arc points to a lower index, root is last)
// and the graph no longer accepts insertions.
#[derive(Clone, Debug)]
pub struct WordGraph {
    nodes: Vec<Node>,
    root: NodeIndex,
    next_id: u32,
    minimized: bool,
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WordGraph {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
            root: 0,
            next_id: 1,
            minimized: false,
        }
    }

    #[inline(always)]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    // Number of nodes in the arena.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    // No words, not even the empty word.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        let root = &self.nodes[self.root as usize];
        !root.accepts && root.arcs.is_empty()
    }

    #[inline(always)]
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    #[inline(always)]
    pub fn accepts(&self, p: NodeIndex) -> bool {
        self.nodes[p as usize].accepts
    }

    #[inline(always)]
    pub fn arcs(&self, p: NodeIndex) -> &[Arc] {
        &self.nodes[p as usize].arcs
    }

    #[inline(always)]
    pub fn node_id(&self, p: NodeIndex) -> u32 {
        self.nodes[p as usize].id
    }

    #[inline(always)]
    pub fn seek(&self, p: NodeIndex, tile: u8) -> Option<NodeIndex> {
        let arcs = self.arcs(p);
        arcs.binary_search_by_key(&tile, |arc| arc.tile)
            .ok()
            .map(|i| arcs[i].target)
    }

    pub fn walk(&self, mut p: NodeIndex, word: &[u8]) -> Option<NodeIndex> {
        for &tile in word {
            p = self.seek(p, tile)?;
        }
        Some(p)
    }

    // Exact membership.
    pub fn search_terminal(&self, word: &[u8]) -> bool {
        self.walk(self.root, word).is_some_and(|p| self.accepts(p))
    }

    pub fn insert(&mut self, word: &[u8]) -> error::Returns<()> {
        if self.minimized {
            return_error!(
                Graph,
                "cannot insert into a minimized graph".to_string()
            );
        }
        if word.contains(&0) {
            return_error!(Graph, format!("tile 0 in word {word:?}"));
        }
        let mut p = self.root;
        for &tile in word {
            let arcs = &self.nodes[p as usize].arcs;
            p = match arcs.binary_search_by_key(&tile, |arc| arc.tile) {
                Ok(i) => arcs[i].target,
                Err(i) => {
                    let target = self.nodes.len() as NodeIndex;
                    self.nodes.push(Node::new(self.next_id));
                    self.next_id += 1;
                    self.nodes[p as usize].arcs.insert(i, Arc { tile, target });
                    target
                }
            };
        }
        self.nodes[p as usize].accepts = true;
        Ok(())
    }

    pub fn minimize(&mut self) {
        let num_before = self.nodes.len();

        fn canonicalize(
            nodes: &mut [Node],
            p: NodeIndex,
            canon: &mut [Option<NodeIndex>],
            finder: &mut std::collections::HashMap<Signature, NodeIndex, MyHasherDefault>,
        ) -> NodeIndex {
            if let Some(c) = canon[p as usize] {
                return c;
            }
            for i in 0..nodes[p as usize].arcs.len() {
                let target = nodes[p as usize].arcs[i].target;
                nodes[p as usize].arcs[i].target = canonicalize(nodes, target, canon, finder);
            }
            let c = *finder.entry(Signature::of(&nodes[p as usize])).or_insert(p);
            canon[p as usize] = Some(c);
            c
        }

        fn compact(
            nodes: &[Node],
            p: NodeIndex,
            new_index: &mut [Option<NodeIndex>],
            new_nodes: &mut Vec<Node>,
        ) -> NodeIndex {
            if let Some(q) = new_index[p as usize] {
                return q;
            }
            let node = &nodes[p as usize];
            let arcs = node
                .arcs
                .iter()
                .map(|arc| Arc {
                    tile: arc.tile,
                    target: compact(nodes, arc.target, new_index, new_nodes),
                })
                .collect();
            let q = new_nodes.len() as NodeIndex;
            new_nodes.push(Node {
                arcs,
                accepts: node.accepts,
                id: node.id,
            });
            new_index[p as usize] = Some(q);
            q
        }

        let mut canon = vec![None; self.nodes.len()];
        let mut finder =
            std::collections::HashMap::<_, _, MyHasherDefault>::with_capacity_and_hasher(
                self.nodes.len(),
                Default::default(),
            );
        let root = canonicalize(&mut self.nodes, self.root, &mut canon, &mut finder);
        let mut new_index = vec![None; self.nodes.len()];
        let mut new_nodes = Vec::with_capacity(finder.len());
        let new_root = compact(&self.nodes, root, &mut new_index, &mut new_nodes);
        self.nodes = new_nodes;
        self.root = new_root;
        self.minimized = true;
        debug_assert_eq!(self.root as usize + 1, self.nodes.len());
        debug_assert!(self.verify_minimal().is_ok());
        log::debug!(
            "minimized word graph from {} to {} nodes",
            num_before,
            self.nodes.len()
        );
    }

    // Fails when two nodes are structurally identical.
    pub fn verify_minimal(&self) -> error::Returns<()> {
        let mut seen = std::collections::HashMap::<_, NodeIndex, MyHasherDefault>::default();
        for (p, node) in (0..).zip(self.nodes.iter()) {
            if let Some(&q) = seen.get(&Signature::of(node)) {
                return_error!(
                    Graph,
                    format!(
                        "nodes {} and {} are equivalent",
                        self.node_id(q),
                        node.id
                    )
                );
            }
            seen.insert(Signature::of(node), p);
        }
        Ok(())
    }

    pub fn count_words(&self) -> u64 {
        fn count(graph: &WordGraph, p: NodeIndex, memo: &mut [Option<u64>]) -> u64 {
            if let Some(n) = memo[p as usize] {
                return n;
            }
            let mut n = graph.accepts(p) as u64;
            for arc in graph.arcs(p) {
                n += count(graph, arc.target, memo);
            }
            memo[p as usize] = Some(n);
            n
        }
        count(self, self.root, &mut vec![None; self.nodes.len()])
    }

    // Visits every word in lexicographic order.
    pub fn for_each_word<F: FnMut(&[u8])>(&self, mut f: F) {
        fn iter<F: FnMut(&[u8])>(graph: &WordGraph, p: NodeIndex, word: &mut Vec<u8>, f: &mut F) {
            if graph.accepts(p) {
                f(word);
            }
            for arc in graph.arcs(p) {
                word.push(arc.tile);
                iter(graph, arc.target, word, f);
                word.pop();
            }
        }
        iter(self, self.root, &mut Vec::new(), &mut f);
    }

    // Graphviz output, nodes named by their stable ids.
    pub fn write_dot<W: std::io::Write>(
        &self,
        alphabet: &alphabet::Alphabet<'_>,
        w: &mut W,
    ) -> error::Returns<()> {
        writeln!(w, "digraph WordGraph {{")?;
        writeln!(w, "  rankdir=LR;")?;
        writeln!(w, "  node [shape=circle];")?;
        for (p, node) in (0..).zip(self.nodes.iter()) {
            let shape = if node.accepts {
                "doublecircle"
            } else {
                "circle"
            };
            if p == self.root {
                writeln!(w, "  n{} [shape={}, label=\"root\"];", node.id, shape)?;
            } else {
                writeln!(w, "  n{} [shape={}, label=\"{}\"];", node.id, shape, node.id)?;
            }
        }
        for node in self.nodes.iter() {
            for arc in node.arcs.iter() {
                writeln!(
                    w,
                    "  n{} -> n{} [label=\"{}\"];",
                    node.id,
                    self.node_id(arc.target),
                    alphabet.from_board(arc.tile).unwrap_or("?")
                )?;
            }
        }
        writeln!(w, "}}")?;
        Ok(())
    }

    pub fn to_bytes(&self) -> error::Returns<Vec<u8>> {
        if !self.minimized {
            return_error!(Graph, "only minimized graphs can be saved".to_string());
        }
        let mut ret = Vec::new();
        ret.extend_from_slice(MAGIC);
        ret.extend_from_slice(&(self.nodes.len() as u32).to_le_bytes());
        ret.extend_from_slice(&self.root.to_le_bytes());
        for node in self.nodes.iter() {
            if node.arcs.len() > u8::MAX as usize {
                return_error!(Graph, format!("node {} has too many arcs", node.id));
            }
            ret.extend_from_slice(&node.id.to_le_bytes());
            ret.push(node.accepts as u8);
            ret.push(node.arcs.len() as u8);
            for arc in node.arcs.iter() {
                ret.push(arc.tile);
                ret.extend_from_slice(&arc.target.to_le_bytes());
            }
        }
        Ok(ret)
    }

    pub fn from_bytes_alloc(buf: &[u8]) -> error::Returns<WordGraph> {
        let mut r = Reader { buf, pos: 0 };
        if r.bytes(MAGIC.len())? != MAGIC {
            return_error!(Graph, "bad magic".to_string());
        }
        let num_nodes = r.u32()?;
        let root = r.u32()?;
        if num_nodes == 0 || root != num_nodes - 1 {
            return_error!(
                Graph,
                format!("root {root} must be the last of {num_nodes} nodes")
            );
        }
        // Each node takes at least 6 bytes.
        if (num_nodes as usize).saturating_mul(6) > buf.len() {
            return_error!(Graph, format!("{num_nodes} nodes cannot fit"));
        }
        let mut nodes = Vec::with_capacity(num_nodes as usize);
        let mut next_id = 0;
        for p in 0..num_nodes {
            let id = r.u32()?;
            let accepts = match r.u8()? {
                0 => false,
                1 => true,
                x => {
                    return_error!(Graph, format!("node {id}: bad accept flag {x}"));
                }
            };
            let num_arcs = r.u8()?;
            let mut arcs = Vec::with_capacity(num_arcs as usize);
            for _ in 0..num_arcs {
                let tile = r.u8()?;
                let target = r.u32()?;
                if tile == 0 || arcs.last().is_some_and(|a: &Arc| a.tile >= tile) {
                    return_error!(Graph, format!("node {id}: arcs not sorted"));
                }
                if target >= p {
                    return_error!(Graph, format!("node {id}: arc to {target} is not a child"));
                }
                arcs.push(Arc { tile, target });
            }
            next_id = next_id.max(id.saturating_add(1));
            nodes.push(Node { arcs, accepts, id });
        }
        if r.pos != buf.len() {
            return_error!(
                Graph,
                format!("{} trailing bytes", buf.len() - r.pos)
            );
        }
        let ret = WordGraph {
            nodes,
            root,
            next_id,
            minimized: true,
        };
        ret.verify_minimal()?;
        Ok(ret)
    }
}

const MAGIC: &[u8] = b"LXDG";

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn bytes(&mut self, n: usize) -> error::Returns<&'a [u8]> {
        match self.buf.get(self.pos..self.pos + n) {
            Some(x) => {
                self.pos += n;
                Ok(x)
            }
            None => {
                return_error!(Graph, format!("truncated at byte {}", self.pos));
            }
        }
    }

    fn u8(&mut self) -> error::Returns<u8> {
        Ok(self.bytes(1)?[0])
    }

    fn u32(&mut self) -> error::Returns<u32> {
        let b = self.bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}
