//! Detection of repeated-element ("array") containers

/// Whether a run of sibling tag names forms an array.
///
/// At least two siblings are required and all must share the first tag
/// name. The decision only looks at the given siblings.
pub fn is_array_container<'a, I>(tag_names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = tag_names.into_iter();
    let Some(first) = names.next() else {
        return false;
    };

    let mut count = 1usize;
    for name in names {
        if name != first {
            return false;
        }
        count += 1;
    }

    count >= 2
}

/// Display annotation for an array container with `count` members.
pub fn count_annotation(count: usize) -> String {
    format!(" ({count})")
}
