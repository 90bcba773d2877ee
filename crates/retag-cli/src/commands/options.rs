use retag_lib::{Mode, Tagger};

/// Tagging options shared by `tree` and `check`.
#[derive(Clone, Copy, Debug)]
pub struct TagOptions {
    pub mode: Mode,
    pub max_depth: Option<u32>,
    pub group_prescan: bool,
}

impl TagOptions {
    pub fn tagger(&self) -> Tagger {
        let tagger = Tagger::new(self.mode).with_group_prescan(self.group_prescan);
        match self.max_depth {
            Some(limit) => tagger.with_max_depth(limit),
            None => tagger,
        }
    }
}
