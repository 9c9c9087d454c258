use crate::app::dashboard::DashboardView;
use std::io::{self, Write};

const SEPARATOR: &str = "---";

/// 描画パスの結果をテキストとして書き出す
///
/// 一致するレコードが無いセクションには「見つかりません」を表示する。
pub fn render_dashboard<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    let tag = view.selected_tag.as_deref().unwrap_or("(なし)");

    writeln!(out, "🌍 気候リスク & 保険ダッシュボード")?;
    writeln!(out, "🗂️ タグ一覧: {}", format_tag_list(&view.all_tags))?;
    writeln!(out)?;

    writeln!(out, "📰 タグ「{}」のニュース記事", tag)?;
    if view.news.is_empty() {
        writeln!(out, "🚫 一致するニュース記事は見つかりませんでした。")?;
    } else {
        for article in &view.news {
            writeln!(out, "## {}", or_unknown(article.title.as_deref()))?;
            writeln!(
                out,
                "📌 ソース: {} | 🗓️ 公開日: {}",
                or_unknown(article.source.as_deref()),
                or_unknown(article.date.as_deref())
            )?;
            writeln!(
                out,
                "{}",
                article.snippet.as_deref().unwrap_or("要約はありません。")
            )?;
            if let Some(link) = article.link.as_deref() {
                writeln!(out, "📖 続きを読む: {}", link)?;
            }
            writeln!(out, "{}", SEPARATOR)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "📚 タグ「{}」の研究論文", tag)?;
    if view.papers.is_empty() {
        writeln!(out, "🚫 一致する研究論文は見つかりませんでした。")?;
    } else {
        for paper in &view.papers {
            let authors = if paper.authors.is_empty() {
                "不明".to_string()
            } else {
                paper.authors.to_string()
            };
            writeln!(out, "## {}", or_unknown(non_empty(&paper.title)))?;
            writeln!(
                out,
                "👨‍🔬 著者: {} | 📅 日付: {}",
                authors,
                or_unknown(non_empty(&paper.date))
            )?;
            writeln!(
                out,
                "{}",
                non_empty(&paper.abstract_text).unwrap_or("概要はありません。")
            )?;
            writeln!(out, "{}", SEPARATOR)?;
        }
    }

    Ok(())
}

/// タグカタログだけを1行1タグで書き出す
pub fn render_tag_list<W: Write>(all_tags: &[String], out: &mut W) -> io::Result<()> {
    for tag in all_tags {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

fn format_tag_list(all_tags: &[String]) -> String {
    if all_tags.is_empty() {
        "(なし)".to_string()
    } else {
        all_tags.join(", ")
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.trim().is_empty())
}

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("不明")
}
