//! Mixed-radix addressing over a compiled search space.

use tracing::debug;

use crate::dimension::ParamDimension;
use crate::error::ParamError;
use crate::set::ParamSet;
use crate::space::ParamSpace;

/// Cached addressing data for one dimension of a product space.
#[derive(Debug, Clone)]
struct DimLayout {
    /// Mixed-radix place value: product of the cardinalities of all
    /// dimensions declared before this one.
    place: usize,
    cardinality: usize,
    /// Per-candidate digit blocks: `blocks[c]` is the first digit owned by
    /// candidate `c`; the block spans that candidate's nested size (1 when
    /// plain).
    blocks: Vec<usize>,
    nested: Vec<Option<Layout>>,
}

/// Addressing tree mirroring the [`ParamSpace`] structure.
#[derive(Debug, Clone)]
enum Layout {
    Product { dims: Vec<DimLayout>, size: usize },
    Union { arms: Vec<Layout>, bases: Vec<usize>, size: usize },
}

impl Layout {
    fn build(space: &ParamSpace) -> Self {
        match space {
            ParamSpace::Product(dimensions) => {
                let mut place = 1usize;
                let mut dims = Vec::with_capacity(dimensions.len());
                for dim in dimensions {
                    let mut blocks = Vec::with_capacity(dim.candidates().len());
                    let mut nested = Vec::with_capacity(dim.candidates().len());
                    let mut offset = 0usize;
                    for candidate in dim.candidates() {
                        blocks.push(offset);
                        offset += candidate.span();
                        nested.push(candidate.nested().map(Layout::build));
                    }
                    dims.push(DimLayout {
                        place,
                        cardinality: offset,
                        blocks,
                        nested,
                    });
                    place *= offset;
                }
                Layout::Product { dims, size: place }
            }
            ParamSpace::Union(alternatives) => {
                let mut bases = Vec::with_capacity(alternatives.len());
                let mut arms = Vec::with_capacity(alternatives.len());
                let mut total = 0usize;
                for alt in alternatives {
                    bases.push(total);
                    let arm = Layout::build(alt);
                    total += arm.size();
                    arms.push(arm);
                }
                Layout::Union {
                    arms,
                    bases,
                    size: total,
                }
            }
        }
    }

    fn size(&self) -> usize {
        match self {
            Layout::Product { size, .. } | Layout::Union { size, .. } => *size,
        }
    }
}

/// A [`ParamSpace`] compiled into a deterministic mixed-radix addressing
/// scheme with O(1) random access to any configuration.
///
/// Built once; immutable afterwards. [`get`][Self::get] is a pure function
/// of the index, so an `IndexedParamSpace` can be shared across threads and
/// queried concurrently (e.g. workers claiming disjoint index ranges).
#[derive(Debug, Clone)]
pub struct IndexedParamSpace {
    space: ParamSpace,
    layout: Layout,
}

impl IndexedParamSpace {
    /// Compile a space, caching its total size, per-dimension place values,
    /// and per-alternative base offsets.
    #[must_use]
    pub fn new(space: ParamSpace) -> Self {
        let layout = Layout::build(&space);
        debug!(size = layout.size(), space = %space, "indexed parameter space built");
        Self { space, layout }
    }

    /// Return the declarative space this index was built from.
    #[must_use]
    pub fn space(&self) -> &ParamSpace {
        &self.space
    }

    /// Total number of addressable configurations.
    #[must_use]
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Decode `index` into a concrete assignment.
    ///
    /// The mapping is a bijection between `[0, size())` and the set of valid
    /// assignments: distinct indices decode to distinct [`ParamSet`]s, and
    /// every declared combination is reachable.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ParamError::IndexOutOfRange`] | `index >= size()` |
    pub fn get(&self, index: usize) -> Result<ParamSet, ParamError> {
        if index >= self.size() {
            return Err(ParamError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        let mut set = ParamSet::new();
        decode(&self.space, &self.layout, index, &mut set);
        Ok(set)
    }
}

/// Recursively decode `index` against a space and its mirrored layout.
///
/// Product: extract each dimension's digit via its place value, locate the
/// candidate block owning the digit, and recurse into the candidate's nested
/// space with the block-relative remainder. Union: locate the alternative
/// block containing `index` and recurse with the base offset subtracted.
fn decode(space: &ParamSpace, layout: &Layout, index: usize, out: &mut ParamSet) {
    match (space, layout) {
        (ParamSpace::Product(dimensions), Layout::Product { dims, .. }) => {
            for (dim, dl) in dimensions.iter().zip(dims) {
                decode_dimension(dim, dl, index, out);
            }
        }
        (ParamSpace::Union(alternatives), Layout::Union { arms, bases, .. }) => {
            // Last alternative whose base is <= index; zero-size arms share a
            // base with their successor and are skipped by taking the last.
            let arm = bases.partition_point(|&base| base <= index) - 1;
            decode(&alternatives[arm], &arms[arm], index - bases[arm], out);
        }
        // The layout tree is built from this exact space in `new`.
        _ => unreachable!("layout does not mirror the parameter space"),
    }
}

fn decode_dimension(dim: &ParamDimension, dl: &DimLayout, index: usize, out: &mut ParamSet) {
    let digit = (index / dl.place) % dl.cardinality;
    // Last candidate whose block starts at or before the digit.
    let c = dl.blocks.partition_point(|&start| start <= digit) - 1;
    let candidate = &dim.candidates()[c];
    out.insert(dim.name(), candidate.value().clone());
    if let (Some(nested_space), Some(nested_layout)) = (candidate.nested(), &dl.nested[c]) {
        decode(nested_space, nested_layout, digit - dl.blocks[c], out);
    }
}
