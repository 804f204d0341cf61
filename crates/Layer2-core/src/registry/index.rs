//! Category Index - 태그 → 키 역색인

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// 태그별 키 집합
///
/// 항상 레지스트리 항목과 같은 write lock 안에서 갱신됩니다.
/// 비어 있는 버킷은 남기지 않습니다.
#[derive(Debug, Default, Clone)]
pub struct CategoryIndex {
    buckets: HashMap<String, BTreeSet<String>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 키를 각 태그 버킷에 추가
    pub fn insert<'a>(&mut self, key: &str, tags: impl IntoIterator<Item = &'a String>) {
        for tag in tags {
            self.buckets
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }
    }

    /// 키를 각 태그 버킷에서 제거
    pub fn remove<'a>(&mut self, key: &str, tags: impl IntoIterator<Item = &'a String>) {
        for tag in tags {
            if let Some(bucket) = self.buckets.get_mut(tag) {
                bucket.remove(key);
                if bucket.is_empty() {
                    self.buckets.remove(tag);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// 태그에 속한 키 (없으면 빈 집합)
    pub fn keys_for(&self, tag: &str) -> BTreeSet<String> {
        self.buckets.get(tag).cloned().unwrap_or_default()
    }

    /// 태그별 항목 수
    pub fn distribution(&self) -> BTreeMap<String, usize> {
        self.buckets
            .iter()
            .map(|(tag, keys)| (tag.clone(), keys.len()))
            .collect()
    }

    /// 정렬된 태그 목록
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.buckets.keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut index = CategoryIndex::new();
        index.insert("a", &tags(&["core", "beta"]));
        index.insert("b", &tags(&["core"]));

        assert_eq!(index.keys_for("core"), tags(&["a", "b"]));
        assert_eq!(index.keys_for("beta"), tags(&["a"]));
        assert!(index.keys_for("missing").is_empty());
        assert_eq!(index.tags(), vec!["beta".to_string(), "core".to_string()]);
    }

    #[test]
    fn test_remove_prunes_empty_buckets() {
        let mut index = CategoryIndex::new();
        index.insert("a", &tags(&["core", "beta"]));
        index.insert("b", &tags(&["core"]));

        index.remove("a", &tags(&["core", "beta"]));

        assert_eq!(index.keys_for("core"), tags(&["b"]));
        assert!(!index.distribution().contains_key("beta"));

        index.remove("b", &tags(&["core"]));
        assert!(index.is_empty());
    }

    #[test]
    fn test_distribution_and_clear() {
        let mut index = CategoryIndex::new();
        index.insert("a", &tags(&["x"]));
        index.insert("b", &tags(&["x", "y"]));

        let distribution = index.distribution();
        assert_eq!(distribution.get("x"), Some(&2));
        assert_eq!(distribution.get("y"), Some(&1));

        index.clear();
        assert!(index.distribution().is_empty());
    }
}
