//! Turns the content lists into blocks, in the order they are listed.

use crate::content::{IconGlyph, NavItem, ProjectItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Nav,
    Skill,
    Project,
    Icon,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::Skill => "skill",
            Self::Project => "project",
            Self::Icon => "icon",
        }
    }
}

/// What a block shows, independently of how it is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub position: usize,
    pub label: String,
}

/// Maps every item to one block with `f(position, item)`. No filtering and no
/// reordering: an empty list gives no blocks.
pub fn compose<T, B>(items: &[T], f: impl Fn(usize, &T) -> B) -> Vec<B> {
    let blocks: Vec<B> = items
        .iter()
        .enumerate()
        .map(|(position, item)| f(position, item))
        .collect();
    log::debug!("composed {} blocks", blocks.len());
    blocks
}

pub fn nav_block(position: usize, item: &NavItem) -> Block {
    Block {
        kind: BlockKind::Nav,
        position,
        label: String::from(item.label),
    }
}

pub fn skill_block(position: usize, skill: &&'static str) -> Block {
    Block {
        kind: BlockKind::Skill,
        position,
        label: String::from(*skill),
    }
}

pub fn project_block(position: usize, project: &ProjectItem) -> Block {
    Block {
        kind: BlockKind::Project,
        position,
        label: project.title(),
    }
}

pub fn icon_block(position: usize, icon: &IconGlyph) -> Block {
    Block {
        kind: BlockKind::Icon,
        position,
        label: String::from(icon.path),
    }
}
