use std::collections::BTreeSet;

/// タグを持ちうるレコードの共通操作を定義するトレイト
pub trait Tagged {
    /// レコードのタグ一覧。タグ欄自体が無いレコードは`None`
    fn tags(&self) -> Option<&[String]>;

    /// 指定タグと完全一致するタグを持つか
    fn has_tag(&self, tag: &str) -> bool {
        self.tags()
            .map(|tags| tags.iter().any(|t| t == tag))
            .unwrap_or(false)
    }
}

/// タグカタログの集計対象となるコレクション
///
/// 型の異なるコレクション（ニュースと論文）を一括で渡すためのトレイトオブジェクト用。
pub trait TagSource {
    fn tag_lists(&self) -> Vec<&[String]>;
}

impl<T: Tagged> TagSource for Vec<T> {
    fn tag_lists(&self) -> Vec<&[String]> {
        self.iter().filter_map(Tagged::tags).collect()
    }
}

impl<T: Tagged> TagSource for &[T] {
    fn tag_lists(&self) -> Vec<&[String]> {
        self.iter().filter_map(Tagged::tags).collect()
    }
}

/// 全コレクションに現れるタグを重複なく昇順で返す
///
/// タグ欄の無いレコードは無視する。比較は大文字小文字を区別する辞書順。
pub fn get_all_tags(collections: &[&dyn TagSource]) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for collection in collections {
        for tag_list in collection.tag_lists() {
            tags.extend(tag_list.iter().cloned());
        }
    }
    tags.into_iter().collect()
}

/// 指定タグを持つレコードだけを元の順序のまま返す
pub fn filter_by_tag<T: Tagged + Clone>(records: &[T], selected_tag: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.has_tag(selected_tag))
        .cloned()
        .collect()
}

/// 表示に使うタグを決める
///
/// 指定があればそのまま使い、無ければカタログ先頭のタグを選ぶ。
pub fn select_tag(all_tags: &[String], requested: Option<&str>) -> Option<String> {
    match requested {
        Some(tag) => Some(tag.to_string()),
        None => all_tags.first().cloned(),
    }
}
