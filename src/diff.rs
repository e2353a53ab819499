pub(crate) use self::r#impl::Diff;

#[cfg_attr(not(all(feature = "diff", not(windows))), allow(dead_code))]
pub(crate) enum Render<'a> {
    Common(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

#[cfg(all(feature = "diff", not(windows)))]
mod r#impl {
    use super::Render;
    use dissimilar::Chunk;
    use std::cmp;

    pub(crate) struct Diff<'a> {
        chunks: Vec<Chunk<'a>>,
    }

    impl<'a> Diff<'a> {
        /// `None` if the two versions share too little for a diff to be more
        /// readable than the new contents on their own.
        pub(crate) fn compute(previous: &'a str, current: &'a str) -> Option<Self> {
            if previous.len() + current.len() > 2048 {
                return None;
            }

            let chunks = dissimilar::diff(previous, current);
            let common_len: usize = chunks
                .iter()
                .map(|chunk| match chunk {
                    Chunk::Equal(common) => common.len(),
                    Chunk::Delete(_) | Chunk::Insert(_) => 0,
                })
                .sum();

            let bigger_len = cmp::max(previous.len(), current.len());
            let worth_printing = 5 * common_len >= 4 * bigger_len;
            if !worth_printing {
                return None;
            }

            Some(Diff { chunks })
        }

        pub(crate) fn iter(&self) -> impl Iterator<Item = Render<'a>> + '_ {
            self.chunks.iter().map(|chunk| match *chunk {
                Chunk::Equal(common) => Render::Common(common),
                Chunk::Delete(removed) => Render::Removed(removed),
                Chunk::Insert(added) => Render::Added(added),
            })
        }
    }
}

#[cfg(not(all(feature = "diff", not(windows))))]
mod r#impl {
    use super::Render;

    pub(crate) enum Diff {}

    impl Diff {
        pub(crate) fn compute(_previous: &str, _current: &str) -> Option<Self> {
            None
        }

        pub(crate) fn iter(&self) -> std::iter::Empty<Render<'static>> {
            match *self {}
        }
    }
}
