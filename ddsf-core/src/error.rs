//! Error types for the DDSF core library.
//!
//! Every failure the generator can report is a rejected argument: either a
//! caller-supplied parameter is out of range, a growth step asked for more
//! attachment targets than the graph can offer, or a sampler returned a
//! position outside its population. Each variant maps to a stable
//! machine-readable code so callers can branch without matching on messages.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while configuring or running graph generation.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The requested node count is below the two-node seed.
    #[error("node count must be at least 2 (got {got})")]
    InvalidNodeCount {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// The requested edge count is zero.
    #[error("edge count must be at least 1 (got {got})")]
    InvalidEdgeCount {
        /// The edge count supplied by the caller.
        got: usize,
    },
    /// The average-degree override is negative, non-finite, or unreachable
    /// with the requested node count.
    #[error("average degree must be finite, non-negative and below the node count {nodes} (got {got})")]
    InvalidAverageDegree {
        /// The average degree supplied by the caller.
        got: f64,
        /// The node count the degree was checked against.
        nodes: usize,
    },
    /// An average degree was requested over zero nodes.
    #[error("cannot average a degree total over zero nodes")]
    ZeroNodes,
    /// An attachment step asked for zero targets.
    #[error("attachment degree must be at least 1 (got {got})")]
    InvalidAttachmentDegree {
        /// The attachment degree that was requested.
        got: usize,
    },
    /// A sampling request exceeded the available candidates.
    #[error("cannot draw {requested} distinct attachment targets from {available} candidates")]
    InsufficientCandidates {
        /// Number of draws requested.
        requested: usize,
        /// Number of candidates that could satisfy the request.
        available: usize,
    },
    /// A sampler returned a position outside the population it drew from.
    #[error("sampled position {position} is outside a population of {length}")]
    PositionOutOfRange {
        /// The position the sampler returned.
        position: usize,
        /// Length of the population being sampled.
        length: usize,
    },
    /// A node identifier did not match the next free identifier.
    #[error("node {got} cannot be introduced; the next identifier is {expected}")]
    UnexpectedNodeId {
        /// The identifier supplied by the caller.
        got: NodeId,
        /// The identifier the graph expects next.
        expected: NodeId,
    },
    /// An edge would connect a node to itself.
    #[error("edge ({node}, {node}) would be a self-loop")]
    SelfLoop {
        /// The node at both ends of the rejected edge.
        node: NodeId,
    },
    /// An edge referenced a node the graph does not contain.
    #[error("node {node} does not exist in a graph of {nodes} nodes")]
    UnknownNode {
        /// The missing node.
        node: NodeId,
        /// The node count at the time of the request.
        nodes: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The requested node count is below the two-node seed.
        InvalidNodeCount => InvalidNodeCount { .. } => "DDSF_INVALID_NODE_COUNT",
        /// The requested edge count is zero.
        InvalidEdgeCount => InvalidEdgeCount { .. } => "DDSF_INVALID_EDGE_COUNT",
        /// The average-degree override was rejected.
        InvalidAverageDegree => InvalidAverageDegree { .. } => "DDSF_INVALID_AVERAGE_DEGREE",
        /// An average degree was requested over zero nodes.
        ZeroNodes => ZeroNodes => "DDSF_ZERO_NODES",
        /// An attachment step asked for zero targets.
        InvalidAttachmentDegree => InvalidAttachmentDegree { .. } => "DDSF_INVALID_ATTACHMENT_DEGREE",
        /// A sampling request exceeded the available candidates.
        InsufficientCandidates => InsufficientCandidates { .. } => "DDSF_INSUFFICIENT_CANDIDATES",
        /// A sampler returned a position outside the population.
        PositionOutOfRange => PositionOutOfRange { .. } => "DDSF_POSITION_OUT_OF_RANGE",
        /// A node identifier did not match the next free identifier.
        UnexpectedNodeId => UnexpectedNodeId { .. } => "DDSF_UNEXPECTED_NODE_ID",
        /// An edge would connect a node to itself.
        SelfLoop => SelfLoop { .. } => "DDSF_SELF_LOOP",
        /// An edge referenced a node the graph does not contain.
        UnknownNode => UnknownNode { .. } => "DDSF_UNKNOWN_NODE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
