/// 1回の描画パスの集計情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// プロバイダから取得したニュース件数（フィルタ前）
    pub news_fetched: usize,
    /// 読み込んだ論文件数（フィルタ前）
    pub papers_loaded: usize,
    /// 選択タグに一致したニュース件数
    pub news_matched: usize,
    /// 選択タグに一致した論文件数
    pub papers_matched: usize,
}

impl std::fmt::Display for PassSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "描画パス完了: ニュース{}/{}件、論文{}/{}件が一致",
            self.news_matched, self.news_fetched, self.papers_matched, self.papers_loaded
        )
    }
}

impl PassSummary {
    /// 新しい集計を作成
    pub fn new(
        news_fetched: usize,
        papers_loaded: usize,
        news_matched: usize,
        papers_matched: usize,
    ) -> Self {
        Self {
            news_fetched,
            papers_loaded,
            news_matched,
            papers_matched,
        }
    }
}
