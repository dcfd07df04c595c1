#![allow(dead_code)]

use std::path::Path;

use git2::{Repository, Signature};

/// Commit the current (empty) index to HEAD of `repo`.
pub fn commit(repo: &Repository, message: &str) -> git2::Oid {
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents = match repo.head().ok().and_then(|h| h.peel_to_commit().ok()) {
        Some(parent) => vec![parent],
        None => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// A working repository with one commit and an `origin` pointing at a bare
/// repository that already holds `remote_tags`.
pub fn repo_with_origin(root: &Path, remote_tags: &[&str]) -> (Repository, Repository) {
    let origin_path = root.join("origin.git");
    let work_path = root.join("work");

    let origin = Repository::init_bare(&origin_path).unwrap();
    let work = Repository::init(&work_path).unwrap();
    let head = commit(&work, "initial");

    {
        let object = work.find_object(head, None).unwrap();
        for tag in remote_tags {
            work.tag_lightweight(tag, &object, false).unwrap();
        }
        let mut remote = work
            .remote("origin", origin_path.to_str().unwrap())
            .unwrap();
        let refspecs: Vec<String> = remote_tags
            .iter()
            .map(|t| format!("refs/tags/{}:refs/tags/{}", t, t))
            .collect();
        let refspec_strs: Vec<&str> = refspecs.iter().map(|s| s.as_str()).collect();
        if !refspec_strs.is_empty() {
            remote.push(&refspec_strs, None).unwrap();
        }
        // Forget the tags locally so only a fetch brings them back.
        for tag in remote_tags {
            work.tag_delete(tag).unwrap();
        }
    }

    (work, origin)
}
