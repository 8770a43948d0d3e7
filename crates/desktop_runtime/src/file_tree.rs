//! Mock file tree kept for hosted apps (the text editor saves into it).
//!
//! Paths are `/`-separated folder names relative to the root; empty segments are ignored, so
//! `"/"`, `""`, and `"//"` all name the root.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileNodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub kind: FileNodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub children: Vec<FileNode>,
    #[serde(default)]
    pub last_modified_unix_ms: u64,
}

impl FileNode {
    pub fn folder(name: impl Into<String>, children: Vec<FileNode>, modified_ms: u64) -> Self {
        Self {
            name: name.into(),
            kind: FileNodeKind::Folder,
            content: None,
            children,
            last_modified_unix_ms: modified_ms,
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>, modified_ms: u64) -> Self {
        Self {
            name: name.into(),
            kind: FileNodeKind::File,
            content: Some(content.into()),
            children: Vec::new(),
            last_modified_unix_ms: modified_ms,
        }
    }

    /// Tree handed out when nothing usable is stored.
    pub fn default_tree(now_ms: u64) -> Self {
        Self::folder(
            "root",
            vec![
                Self::folder(
                    "Documents",
                    vec![Self::file(
                        "Welcome.txt",
                        "Welcome to your desktop!\n\nThis is your personal file system where you \
                         can save and organize your documents.",
                        now_ms,
                    )],
                    now_ms,
                ),
                Self::folder("Downloads", Vec::new(), now_ms),
                Self::folder("Pictures", Vec::new(), now_ms),
            ],
            now_ms,
        )
    }

    pub fn is_folder(&self) -> bool {
        self.kind == FileNodeKind::Folder
    }

    fn child_folder(&self, name: &str) -> Option<&FileNode> {
        self.children
            .iter()
            .find(|child| child.is_folder() && child.name == name)
    }

    fn folder_at(&self, path: &str) -> Option<&FileNode> {
        path_segments(path).try_fold(self, |dir, segment| dir.child_folder(segment))
    }

    /// Writes `content` to `path/filename`, creating missing folders and overwriting an existing
    /// file of the same name.
    pub fn save_file(&mut self, path: &str, filename: &str, content: &str, now_ms: u64) {
        let mut dir = self;
        for segment in path_segments(path) {
            let index = match dir
                .children
                .iter()
                .position(|child| child.is_folder() && child.name == segment)
            {
                Some(index) => index,
                None => {
                    dir.children
                        .push(FileNode::folder(segment, Vec::new(), now_ms));
                    dir.children.len() - 1
                }
            };
            dir = &mut dir.children[index];
        }

        match dir
            .children
            .iter_mut()
            .find(|child| !child.is_folder() && child.name == filename)
        {
            Some(existing) => {
                existing.content = Some(content.to_string());
                existing.last_modified_unix_ms = now_ms;
            }
            None => dir.children.push(FileNode::file(filename, content, now_ms)),
        }
    }

    /// Content of `path/filename`, or `None` when the folder or file is missing.
    pub fn load_file(&self, path: &str, filename: &str) -> Option<&str> {
        self.folder_at(path)?
            .children
            .iter()
            .find(|child| !child.is_folder() && child.name == filename)
            .and_then(|file| file.content.as_deref())
    }

    /// Entries of the folder at `path`; a missing folder lists as empty.
    pub fn list_directory(&self, path: &str) -> &[FileNode] {
        self.folder_at(path)
            .map(|dir| dir.children.as_slice())
            .unwrap_or(&[])
    }
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(entries: &[FileNode]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn default_tree_has_standard_folders_and_welcome_note() {
        let tree = FileNode::default_tree(5);
        assert_eq!(
            names(tree.list_directory("/")),
            vec!["Documents", "Downloads", "Pictures"]
        );
        assert!(tree
            .load_file("/Documents", "Welcome.txt")
            .is_some_and(|text| text.starts_with("Welcome")));
    }

    #[test]
    fn save_creates_missing_folders_and_overwrites_files() {
        let mut tree = FileNode::default_tree(1);

        tree.save_file("/Documents/notes/2024", "todo.txt", "milk", 2);
        tree.save_file("Documents//notes/2024/", "todo.txt", "milk, eggs", 3);

        assert_eq!(
            tree.load_file("/Documents/notes/2024", "todo.txt"),
            Some("milk, eggs")
        );
        let saved = &tree.list_directory("/Documents/notes/2024")[0];
        assert_eq!(saved.last_modified_unix_ms, 3);
        assert_eq!(tree.list_directory("/Documents/notes").len(), 1);
    }

    #[test]
    fn files_and_folders_with_the_same_name_do_not_collide() {
        let mut tree = FileNode::folder("root", Vec::new(), 0);
        tree.save_file("/", "Pictures", "not a folder", 1);
        tree.save_file("/Pictures", "cat.txt", "meow", 1);

        assert_eq!(tree.load_file("/", "Pictures"), Some("not a folder"));
        assert_eq!(tree.load_file("/Pictures", "cat.txt"), Some("meow"));
        assert_eq!(tree.list_directory("/").len(), 2);
    }

    #[test]
    fn missing_paths_read_as_empty() {
        let tree = FileNode::default_tree(0);
        assert_eq!(tree.load_file("/Nowhere", "Welcome.txt"), None);
        assert_eq!(tree.load_file("/Documents", "missing.txt"), None);
        assert!(tree.list_directory("/Documents/Welcome.txt").is_empty());
        assert!(tree.list_directory("/Music").is_empty());
    }
}
