use crate::types::ChatMeta;

/// Local copy of the user's chats plus the favorites filter.
///
/// Order is the backend's, except that newly created chats go to the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatList {
    chats: Vec<ChatMeta>,
    favorites_only: bool,
}

impl ChatList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set with a fresh listing.
    pub fn replace_all(&mut self, chats: Vec<ChatMeta>) {
        self.chats = chats;
    }

    pub fn prepend(&mut self, chat: ChatMeta) {
        self.chats.insert(0, chat);
    }

    /// Remove a chat by id, returning it if it was present.
    pub fn remove(&mut self, chat_id: &str) -> Option<ChatMeta> {
        let idx = self.chats.iter().position(|c| c.id == chat_id)?;
        Some(self.chats.remove(idx))
    }

    /// Set the favorite flag on exactly one chat. Returns false for unknown ids.
    pub fn set_favorite(&mut self, chat_id: &str, favorite: bool) -> bool {
        match self.chats.iter_mut().find(|c| c.id == chat_id) {
            Some(chat) => {
                chat.favorite = favorite;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, chat_id: &str) -> Option<&ChatMeta> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    pub fn chats(&self) -> &[ChatMeta] {
        &self.chats
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    pub fn set_favorites_only(&mut self, on: bool) {
        self.favorites_only = on;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
    }

    /// The chats to display: everything, or only favorites when the filter is on.
    pub fn filtered(&self) -> Vec<&ChatMeta> {
        self.chats
            .iter()
            .filter(|c| !self.favorites_only || c.favorite)
            .collect()
    }
}
