//! Tantivy-backed [`SearchIndex`].
//!
//! Documents are flattened into two raw-string fields: `_all` holds analyzed
//! tokens of every string leaf and `_fields` holds the same tokens prefixed
//! by their dotted path. Query strings are parsed by [`crate::query`] and
//! translated into boolean combinations of term queries over those fields.

use crate::analyzer::{analyze, build_analyzer};
use crate::config::{CommitPolicy, IndexConfig, StorageBackend};
use crate::error::{IndexError, QuerySyntaxError};
use crate::flatten::{document_terms, path_term};
use crate::query::{parse_query, Clause, ClauseOccur};
use crate::traits::SearchIndex;
use crate::types::{Batch, SearchHit, SearchRequest, SearchResults};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tantivy::collector::{Count, TopDocs};
use tantivy::query::{BooleanQuery, Occur, Query, TermQuery};
use tantivy::schema::{Field, IndexRecordOption, Schema, Value as _, STORED, STRING};
use tantivy::tokenizer::TextAnalyzer;
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, Searcher, TantivyDocument, Term};
use tracing::{debug, info};

const ID_FIELD: &str = "_id";
const ALL_FIELD: &str = "_all";
const SCOPED_FIELD: &str = "_fields";

#[derive(Debug, Clone, Copy)]
struct SchemaFields {
    id: Field,
    all: Field,
    scoped: Field,
}

fn build_schema() -> (Schema, SchemaFields) {
    let mut builder = Schema::builder();
    let id = builder.add_text_field(ID_FIELD, STRING | STORED);
    let all = builder.add_text_field(ALL_FIELD, STRING);
    let scoped = builder.add_text_field(SCOPED_FIELD, STRING);
    (builder.build(), SchemaFields { id, all, scoped })
}

struct WriterState {
    writer: IndexWriter,
    /// Documents added since the last commit.
    pending: usize,
}

pub struct TantivyIndex {
    fields: SchemaFields,
    reader: IndexReader,
    writer: Mutex<WriterState>,
    analyzer: TextAnalyzer,
    config: IndexConfig,
}

impl std::fmt::Debug for TantivyIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TantivyIndex")
            .field("location", &self.location())
            .field("commit_policy", &self.config.commit_policy)
            .finish_non_exhaustive()
    }
}

impl TantivyIndex {
    /// Create a new, empty index.
    ///
    /// For disk storage the location directory is created if missing; an
    /// existing index there is an error (see [`crate::destroy_location`]).
    pub fn create(config: &IndexConfig) -> Result<Self, IndexError> {
        let (schema, fields) = build_schema();

        let index = match config.storage {
            StorageBackend::Disk => {
                std::fs::create_dir_all(&config.location).map_err(|source| IndexError::Io {
                    path: config.location.clone(),
                    source,
                })?;
                Index::create_in_dir(&config.location, schema)?
            }
            StorageBackend::Memory => Index::create_in_ram(schema),
        };

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        let writer = index.writer_with_num_threads(config.writer_threads, config.writer_heap_bytes)?;

        info!(
            "Created {} (commit policy {:?})",
            describe_location(config),
            config.commit_policy
        );

        Ok(Self {
            fields,
            reader,
            writer: Mutex::new(WriterState { writer, pending: 0 }),
            analyzer: build_analyzer(config.mapping.max_token_len),
            config: config.clone(),
        })
    }

    /// Location on disk, or `None` for a RAM index.
    pub fn location(&self) -> Option<PathBuf> {
        match self.config.storage {
            StorageBackend::Disk => Some(self.config.location.clone()),
            StorageBackend::Memory => None,
        }
    }

    fn lock_writer(&self) -> Result<MutexGuard<'_, WriterState>, IndexError> {
        self.writer.lock().map_err(|_| IndexError::WriterPoisoned)
    }

    fn to_tantivy_doc(&self, id: &str, document: &Value) -> Result<TantivyDocument, IndexError> {
        if !document.is_object() {
            return Err(IndexError::InvalidDocument {
                id: id.to_string(),
                reason: "document root must be a JSON object".to_string(),
            });
        }

        let mut analyzer = self.analyzer.clone();
        let terms = document_terms(document, &mut analyzer, self.config.mapping.default_field);

        let mut doc = TantivyDocument::default();
        doc.add_text(self.fields.id, id);
        for token in &terms.all {
            doc.add_text(self.fields.all, token);
        }
        for term in &terms.scoped {
            doc.add_text(self.fields.scoped, term);
        }
        Ok(doc)
    }

    /// Replace-by-id: delete any document with the same id, then add.
    fn stage(&self, state: &WriterState, id: &str, document: &Value) -> Result<(), IndexError> {
        let doc = self.to_tantivy_doc(id, document)?;
        state
            .writer
            .delete_term(Term::from_field_text(self.fields.id, id));
        state.writer.add_document(doc)?;
        Ok(())
    }

    fn commit_locked(&self, state: &mut WriterState) -> Result<(), IndexError> {
        state.writer.commit()?;
        self.reader.reload()?;
        debug!(documents = state.pending, "tantivy commit completed");
        state.pending = 0;
        Ok(())
    }

    /// Commit staged puts so the next searcher sees them.
    fn flush_pending(&self) -> Result<(), IndexError> {
        let mut state = self.lock_writer()?;
        if state.pending > 0 {
            self.commit_locked(&mut state)?;
        }
        Ok(())
    }

    fn term_query(&self, clause: &Clause) -> Result<Box<dyn Query>, IndexError> {
        let mut analyzer = self.analyzer.clone();
        let tokens = analyze(&mut analyzer, &clause.value);
        if tokens.is_empty() {
            return Err(QuerySyntaxError::NoTerms {
                clause: clause.text.clone(),
            }
            .into());
        }

        let mut subqueries: Vec<(Occur, Box<dyn Query>)> = tokens
            .iter()
            .map(|token| {
                let term = match &clause.field {
                    Some(path) => Term::from_field_text(self.fields.scoped, &path_term(path, token)),
                    None => Term::from_field_text(self.fields.all, token),
                };
                let query: Box<dyn Query> =
                    Box::new(TermQuery::new(term, IndexRecordOption::Basic));
                (Occur::Must, query)
            })
            .collect();

        if subqueries.len() == 1 {
            let (_, query) = subqueries.remove(0);
            return Ok(query);
        }
        Ok(Box::new(BooleanQuery::new(subqueries)))
    }

    /// Translate a query string into a tantivy query.
    pub fn build_query(&self, query: &str) -> Result<Box<dyn Query>, IndexError> {
        let clauses = parse_query(query)?;
        let mut subqueries = Vec::with_capacity(clauses.len());
        for clause in &clauses {
            let occur = match clause.occur {
                ClauseOccur::Must => Occur::Must,
                ClauseOccur::MustNot => Occur::MustNot,
                ClauseOccur::Should => Occur::Should,
            };
            subqueries.push((occur, self.term_query(clause)?));
        }
        Ok(Box::new(BooleanQuery::new(subqueries)))
    }

    fn collect_hits(
        &self,
        searcher: &Searcher,
        query: &dyn Query,
        request: &SearchRequest,
    ) -> Result<SearchResults, IndexError> {
        if request.limit == 0 {
            let total = searcher.search(query, &Count)?;
            return Ok(SearchResults {
                hits: Vec::new(),
                total: total as u64,
            });
        }

        let collector = (
            Count,
            TopDocs::with_limit(request.limit).and_offset(request.offset),
        );
        let (total, top_docs) = searcher.search(query, &collector)?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;
            let id = doc
                .get_first(self.fields.id)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let explanation = if request.explain {
                Some(query.explain(searcher, address)?.to_pretty_json())
            } else {
                None
            };
            hits.push(SearchHit {
                id,
                score,
                explanation,
            });
        }

        Ok(SearchResults {
            hits,
            total: total as u64,
        })
    }
}

impl SearchIndex for TantivyIndex {
    fn put(&self, id: &str, document: &Value) -> Result<(), IndexError> {
        let mut state = self.lock_writer()?;
        self.stage(&state, id, document)?;
        state.pending += 1;
        if self.config.commit_policy == CommitPolicy::PerDocument {
            self.commit_locked(&mut state)?;
        }
        Ok(())
    }

    fn commit(&self, batch: Batch) -> Result<(), IndexError> {
        let mut state = self.lock_writer()?;
        if state.pending > 0 {
            self.commit_locked(&mut state)?;
        }

        let size = batch.len();
        for (id, document) in batch.iter() {
            if let Err(e) = self.stage(&state, id, document) {
                state.writer.rollback()?;
                return Err(e);
            }
        }
        state.pending = size;
        if let Err(e) = self.commit_locked(&mut state) {
            state.pending = 0;
            state.writer.rollback()?;
            return Err(e);
        }

        debug!(documents = size, "batch committed");
        Ok(())
    }

    fn search(&self, request: &SearchRequest) -> Result<SearchResults, IndexError> {
        let query = self.build_query(&request.query)?;
        self.flush_pending()?;

        let searcher = self.reader.searcher();
        let results = self.collect_hits(&searcher, query.as_ref(), request)?;
        debug!(
            query = %request.query,
            total = results.total,
            returned = results.hits.len(),
            "search completed"
        );
        Ok(results)
    }

    fn doc_count(&self) -> Result<u64, IndexError> {
        self.flush_pending()?;
        Ok(self.reader.searcher().num_docs())
    }

    fn close(self) -> Result<(), IndexError> {
        let mut state = self
            .writer
            .into_inner()
            .map_err(|_| IndexError::WriterPoisoned)?;
        if state.pending > 0 {
            state.writer.commit()?;
        }
        state.writer.wait_merging_threads()?;
        info!("Closed {}", describe_location(&self.config));
        Ok(())
    }
}

fn describe_location(config: &IndexConfig) -> String {
    match config.storage {
        StorageBackend::Disk => format!("disk index at {}", config.location.display()),
        StorageBackend::Memory => "memory index".to_string(),
    }
}
